//! Live-database tests. Skipped when `SKIP_DB_TESTS` is set or `DATABASE_URL` is absent.



pub(crate) fn db_tests_disabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}
