use sqlx::SqlitePool;

/// Applied in order on startup; every statement is idempotent.
pub const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id            TEXT PRIMARY KEY,
        email         TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        role          TEXT NOT NULL,
        first_name    TEXT,
        last_name     TEXT,
        phone         TEXT,
        avatar        TEXT,
        created_at    TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS salons (
        id          TEXT PRIMARY KEY,
        name        TEXT NOT NULL,
        description TEXT,
        address     TEXT NOT NULL,
        city        TEXT NOT NULL,
        state       TEXT NOT NULL,
        zip_code    TEXT,
        latitude    REAL,
        longitude   REAL,
        phone       TEXT,
        email       TEXT,
        images      TEXT NOT NULL DEFAULT '[]',
        owner_id    TEXT NOT NULL,
        is_active   INTEGER NOT NULL DEFAULT 1,
        created_at  TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS services (
        id               TEXT PRIMARY KEY,
        salon_id         TEXT NOT NULL,
        name             TEXT NOT NULL,
        description      TEXT,
        category         TEXT NOT NULL,
        duration_minutes INTEGER NOT NULL,
        price            REAL NOT NULL,
        is_active        INTEGER NOT NULL DEFAULT 1
    )",
    "CREATE TABLE IF NOT EXISTS stylists (
        id               TEXT PRIMARY KEY,
        user_id          TEXT NOT NULL,
        salon_id         TEXT NOT NULL,
        bio              TEXT,
        experience_years INTEGER,
        specialties      TEXT NOT NULL DEFAULT '[]',
        is_active        INTEGER NOT NULL DEFAULT 1
    )",
    "CREATE TABLE IF NOT EXISTS stylist_schedules (
        id           TEXT PRIMARY KEY,
        stylist_id   TEXT NOT NULL,
        day_of_week  INTEGER NOT NULL,
        start_time   TEXT NOT NULL,
        end_time     TEXT NOT NULL,
        is_available INTEGER NOT NULL DEFAULT 1
    )",
    "CREATE TABLE IF NOT EXISTS bookings (
        id          TEXT PRIMARY KEY,
        customer_id TEXT NOT NULL,
        salon_id    TEXT NOT NULL,
        stylist_id  TEXT NOT NULL,
        datetime    TEXT NOT NULL,
        total_price REAL NOT NULL,
        status      TEXT NOT NULL DEFAULT 'PENDING',
        notes       TEXT,
        created_at  TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS booking_services (
        booking_id TEXT NOT NULL,
        service_id TEXT NOT NULL,
        PRIMARY KEY (booking_id, service_id)
    )",
    "CREATE TABLE IF NOT EXISTS reviews (
        id          TEXT PRIMARY KEY,
        salon_id    TEXT NOT NULL,
        customer_id TEXT NOT NULL,
        booking_id  TEXT,
        rating      INTEGER NOT NULL,
        comment     TEXT,
        created_at  TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_services_salon ON services (salon_id)",
    "CREATE INDEX IF NOT EXISTS idx_stylists_salon ON stylists (salon_id)",
    "CREATE INDEX IF NOT EXISTS idx_schedules_stylist ON stylist_schedules (stylist_id)",
    "CREATE INDEX IF NOT EXISTS idx_reviews_salon ON reviews (salon_id)",
    "CREATE INDEX IF NOT EXISTS idx_bookings_customer ON bookings (customer_id)",
];

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
