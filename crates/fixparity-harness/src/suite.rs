//! Standard query suites for the fixture presets.

use crate::runner::QueryCase;

/// Queries the driver binding tests run against the `driver_tests` fixture.
pub fn driver_queries() -> Vec<QueryCase> {
    vec![
        QueryCase::all("SELECT * FROM users"),
        QueryCase::all("SELECT id FROM users"),
        QueryCase::one_at_a_time("SELECT * FROM users"),
        QueryCase::one_at_a_time("SELECT MAX(id) FROM users"),
        QueryCase::mixed("SELECT username FROM users", 1),
        QueryCase::all("SELECT data FROM blobs"),
        QueryCase::one_at_a_time("SELECT id, data FROM blobs WHERE id > 250"),
    ]
}

/// Queries over the larger `shell_tests` fixture.
pub fn shell_queries() -> Vec<QueryCase> {
    vec![
        QueryCase::all("SELECT COUNT(*) FROM users"),
        QueryCase::all("SELECT * FROM users ORDER BY id LIMIT 100"),
        QueryCase::mixed("SELECT first_name, age FROM users WHERE age > 50 ORDER BY id", 10),
        QueryCase::all("SELECT state, COUNT(*) FROM users GROUP BY state ORDER BY state"),
        QueryCase::all("SELECT * FROM products"),
        QueryCase::all("SELECT name, price FROM products WHERE price > 50.0 ORDER BY name"),
        QueryCase::one_at_a_time("SELECT * FROM blobs"),
        QueryCase::all("SELECT id, length(random_data), typeof(text_data) FROM blobs"),
    ]
}

/// Queries over the `extensions` fixture.
pub fn extension_queries() -> Vec<QueryCase> {
    vec![
        QueryCase::all("SELECT * FROM numbers"),
        QueryCase::all("SELECT SUM(value), AVG(value) FROM numbers"),
        QueryCase::all("SELECT value, percent, value * percent / 100 FROM test"),
        QueryCase::one_at_a_time("SELECT typeof(value), typeof(percent) FROM test"),
    ]
}
