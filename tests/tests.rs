mod model;
mod schema;
mod startup;
mod util;
