use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS profile (
            id                 INTEGER PRIMARY KEY CHECK (id = 1),
            age                INTEGER NOT NULL,
            weight             REAL NOT NULL,
            height             REAL NOT NULL,
            allergies          TEXT,
            goal               TEXT NOT NULL,
            dietary_preference TEXT NOT NULL,
            target_calories    INTEGER,
            target_protein     INTEGER,
            target_carbs       INTEGER,
            target_fat         INTEGER
        );

        CREATE TABLE IF NOT EXISTS meals (
            seq        INTEGER PRIMARY KEY AUTOINCREMENT,
            id         TEXT NOT NULL,
            date       TEXT NOT NULL,
            meal_type  TEXT NOT NULL,
            name       TEXT NOT NULL,
            calories   REAL NOT NULL,
            protein    REAL NOT NULL,
            carbs      REAL NOT NULL,
            fat        REAL NOT NULL,
            notes      TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_meals_id ON meals(id);
        CREATE INDEX IF NOT EXISTS idx_meals_date ON meals(date);",
    )?;
    Ok(())
}
