//! Booking request persistence

use chrono::Utc;
use rusqlite::{params, Row};

use crucible_core::models::{BookingRequest, CreateBooking};

use super::{format_datetime, parse_datetime, Database};
use crate::error::ServerResult;

fn row_to_booking(row: &Row<'_>) -> rusqlite::Result<BookingRequest> {
    Ok(BookingRequest {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        message: row.get(4)?,
        workshop_id: row.get(5)?,
        created_at: parse_datetime(row.get::<_, String>(6)?),
    })
}

impl Database {
    /// List booking requests, newest first
    pub fn list_bookings(&self) -> ServerResult<Vec<BookingRequest>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, email, phone, message, workshop_id, created_at
             FROM booking_requests ORDER BY created_at DESC",
        )?;

        let bookings = stmt
            .query_map([], row_to_booking)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(bookings)
    }

    /// Store a validated booking request; optional fields land as NULL
    pub fn create_booking(&self, req: &CreateBooking) -> ServerResult<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO booking_requests (name, email, phone, message, workshop_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                req.name,
                req.email,
                req.phone,
                req.message,
                req.workshop_id,
                format_datetime(Utc::now()),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }
}
