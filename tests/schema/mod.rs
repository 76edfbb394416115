mod catalog;
mod constraints;
mod relations;
mod timestamps;
