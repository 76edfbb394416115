//! Statement builders shared by the migrations.
//!
//! Foreign keys are declared inside `CREATE TABLE` rather than added afterwards so the
//! same migrations run on SQLite, which cannot `ALTER TABLE ... ADD CONSTRAINT`.

use sea_orm_migration::prelude::*;

/// Literals accepted by the `gender` column.
pub const GENDER_LITERALS: [&str; 4] = ["MALE", "FEMALE", "UNKNOWN", "AGENDER"];

/// Literals accepted by the `favorite.type` column.
pub const ITEM_TYPE_LITERALS: [&str; 8] = [
    "CHARACTER",
    "FILM",
    "MANUFACTURER",
    "PERSON",
    "PLANET",
    "SPECIES",
    "STARSHIP",
    "VEHICLE",
];

/// Literals accepted by the `species_color.color_type` column.
pub const COLOR_TYPE_LITERALS: [&str; 3] = ["EYE", "HAIR", "SKIN"];

/// Foreign key that refuses to delete or re-key a referenced row.
pub fn restrict_fk<F, FC, T, TC>(
    name: &str,
    from_tbl: F,
    from_col: FC,
    to_tbl: T,
    to_col: TC,
) -> ForeignKeyCreateStatement
where
    F: IntoTableRef,
    FC: IntoIden,
    T: IntoTableRef,
    TC: IntoIden,
{
    ForeignKey::create()
        .name(name)
        .from(from_tbl, from_col)
        .to(to_tbl, to_col)
        .on_delete(ForeignKeyAction::Restrict)
        .on_update(ForeignKeyAction::NoAction)
        .to_owned()
}

/// Unique index over the foreign-key pair of an association table.
pub fn pair_index<T, A, B>(name: &str, table: T, left: A, right: B) -> IndexCreateStatement
where
    T: IntoTableRef,
    A: IntoIden,
    B: IntoIden,
{
    Index::create()
        .name(name)
        .table(table)
        .col(left)
        .col(right)
        .unique()
        .if_not_exists()
        .to_owned()
}

pub fn drop_index<T>(name: &str, table: T) -> IndexDropStatement
where
    T: IntoTableRef,
{
    Index::drop().name(name).table(table).to_owned()
}
