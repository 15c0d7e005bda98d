//! Ready-made fixture specs used by the driver compatibility suites.

use fixparity_types::Value;

use crate::spec::{ColumnRule, ColumnSpec, FixtureSpec, IndexEncoding, RowSource, TableSpec};

/// Seed the presets are built with unless a suite asks otherwise.
pub const DEFAULT_SEED: u64 = 0;

/// Default row count of the generated `users` table in [`shell_tests`].
pub const SHELL_TESTS_USERS: u64 = 10_000;

/// Rows in the index-derived `blobs` table of [`driver_tests`].
pub const DRIVER_TESTS_BLOBS: u64 = 256;

pub const PRODUCT_NAMES: [&str; 11] = [
    "hat",
    "cap",
    "shirt",
    "sweater",
    "sweatshirt",
    "shorts",
    "jeans",
    "sneakers",
    "boots",
    "coat",
    "accessories",
];

/// Small fixture for driver binding tests.
///
/// - `users(id INTEGER PRIMARY KEY, username TEXT)`: `alice`, `bob`
/// - `blobs(id INTEGER PRIMARY KEY, data BLOB)`: 256 rows, row `i` holds
///   the single byte `i`
pub fn driver_tests() -> FixtureSpec {
    FixtureSpec::new()
        .table(
            TableSpec::new("users")
                .column(ColumnSpec::primary_key("id"))
                .column(ColumnSpec::text("username"))
                .rows(RowSource::literal([["alice"], ["bob"]])),
        )
        .table(
            TableSpec::new("blobs")
                .column(ColumnSpec::primary_key("id"))
                .column(ColumnSpec::blob("data"))
                .rows(RowSource::IndexDerived {
                    count: DRIVER_TESTS_BLOBS,
                    encoding: IndexEncoding::OneByte,
                }),
        )
}

/// Larger synthetic fixture for shell-level query tests: a `users` table of
/// `users` generated people, an 11-row `products` table and 100 `blobs`.
pub fn shell_tests(users: u64) -> FixtureSpec {
    FixtureSpec::new()
        .table(
            TableSpec::new("users")
                .column(ColumnSpec::primary_key("id"))
                .column(ColumnSpec::text("first_name"))
                .column(ColumnSpec::text("last_name"))
                .column(ColumnSpec::text("email"))
                .column(ColumnSpec::text("phone_number"))
                .column(ColumnSpec::text("address"))
                .column(ColumnSpec::text("city"))
                .column(ColumnSpec::text("state"))
                .column(ColumnSpec::text("zipcode"))
                .column(ColumnSpec::integer("age"))
                .rows(RowSource::Generated {
                    count: users,
                    rules: vec![
                        ColumnRule::FirstName,
                        ColumnRule::LastName,
                        ColumnRule::Email,
                        ColumnRule::PhoneNumber,
                        ColumnRule::StreetAddress,
                        ColumnRule::City,
                        ColumnRule::StateAbbr,
                        ColumnRule::Zipcode,
                        ColumnRule::IntRange { min: 1, max: 100 },
                    ],
                }),
        )
        .table(
            TableSpec::new("products")
                .column(ColumnSpec::primary_key("id"))
                .column(ColumnSpec::text("name"))
                .column(ColumnSpec::real("price"))
                .rows(RowSource::Generated {
                    count: PRODUCT_NAMES.len() as u64,
                    rules: vec![
                        ColumnRule::Cycle(PRODUCT_NAMES.iter().map(|&n| Value::from(n)).collect()),
                        // Whole numbers, stored as REAL by column affinity.
                        ColumnRule::IntRange { min: 1, max: 100 },
                    ],
                }),
        )
        .table(
            TableSpec::new("blobs")
                .column(ColumnSpec::primary_key("id"))
                .column(ColumnSpec::blob("text_data"))
                .column(ColumnSpec::blob("random_data"))
                .rows(RowSource::Generated {
                    count: 100,
                    rules: vec![
                        ColumnRule::TextBytes { max_chars: 50 },
                        ColumnRule::Binary { len: 128 },
                    ],
                }),
        )
}

/// Numeric tables used by the scalar-function extension tests.
pub fn extensions() -> FixtureSpec {
    FixtureSpec::new()
        .table(
            TableSpec::new("numbers")
                .column(ColumnSpec::primary_key("id"))
                .column(ColumnSpec::real("value").not_null())
                .rows(RowSource::literal(
                    (1..=7).map(|i| [Value::Real(f64::from(i))]),
                )),
        )
        .table(
            TableSpec::new("test")
                .column(ColumnSpec::real("value"))
                .column(ColumnSpec::real("percent"))
                .rows(RowSource::literal(
                    (1..=7).map(|i| [Value::Integer(i * 10), Value::Integer(25)]),
                )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        driver_tests().validate().unwrap();
        shell_tests(SHELL_TESTS_USERS).validate().unwrap();
        extensions().validate().unwrap();
    }

    #[test]
    fn preset_shapes() {
        let spec = driver_tests();
        let names: Vec<&str> = spec.table_names().collect();
        assert_eq!(names, vec!["users", "blobs"]);

        let spec = shell_tests(25);
        let rows: Vec<(String, u64)> = spec
            .tables
            .iter()
            .map(|t| (t.name.clone(), t.row_count()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("users".to_owned(), 25),
                ("products".to_owned(), 11),
                ("blobs".to_owned(), 100),
            ]
        );
    }
}
