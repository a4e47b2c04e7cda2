// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use hotel_booking_rs::{
    BookingEngine, BookingError, BookingId, BookingOutcome, BookingRequest, EntityStore, Fixture,
    RoomId, UserId,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Hotel Booking - Replay booking requests against seeded event data
///
/// Loads enrollments, tickets, hotels, and rooms from a JSON fixture, then
/// processes a CSV of booking requests in order and writes one result row per
/// request to stdout.
#[derive(Parser, Debug)]
#[command(name = "hotel-booking")]
#[command(about = "Processes hotel booking requests for event attendees", long_about = None)]
struct Args {
    /// Path to JSON fixture with ticket types, hotels, rooms, enrollments and tickets
    #[arg(value_name = "FIXTURE")]
    fixture: PathBuf,

    /// Path to CSV file with booking requests
    ///
    /// Expected format: op,user,booking,room
    /// Example: cargo run -- event.json requests.csv > results.csv
    #[arg(value_name = "REQUESTS")]
    requests: PathBuf,

    /// Log filter (e.g. `debug`, `hotel_booking_rs=trace`). Overrides RUST_LOG.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logger(args.log_level.as_deref()) {
        eprintln!("Error configuring logging: {}", e);
        process::exit(1);
    }

    let engine = BookingEngine::new();

    let fixture = match File::open(&args.fixture)
        .map_err(|e| e.to_string())
        .and_then(|f| Fixture::from_reader(BufReader::new(f)).map_err(|e| e.to_string()))
    {
        Ok(fixture) => fixture,
        Err(e) => {
            eprintln!("Error loading fixture '{}': {}", args.fixture.display(), e);
            process::exit(1);
        }
    };
    fixture.seed(engine.store());

    let file = match File::open(&args.requests) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", args.requests.display(), e);
            process::exit(1);
        }
    };

    if let Err(e) = process_requests(&engine, BufReader::new(file), std::io::stdout()) {
        eprintln!("Error processing requests: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr subscriber so stdout carries only result rows.
fn init_logger(level: Option<&str>) -> Result<(), tracing_subscriber::filter::ParseError> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Raw CSV record matching the input format.
///
/// Fields: `op, user, booking, room`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    op: String,
    user: u32,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    booking: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    room: Option<u32>,
}

impl CsvRecord {
    /// Converts a CSV record into a booking request.
    ///
    /// Required fields are checked here, before the engine sees the request.
    fn into_request(self) -> Result<BookingRequest, BookingError> {
        let user_id = UserId(self.user);

        match self.op.to_lowercase().as_str() {
            "get" => Ok(BookingRequest::Get { user_id }),
            "create" => {
                let room_id = RoomId(self.room.ok_or(BookingError::MissingRoomId)?);
                Ok(BookingRequest::Create { user_id, room_id })
            }
            "update" => {
                let booking_id = BookingId(self.booking.ok_or(BookingError::MissingBookingId)?);
                let room_id = RoomId(self.room.ok_or(BookingError::MissingRoomId)?);
                Ok(BookingRequest::Update {
                    user_id,
                    booking_id,
                    room_id,
                })
            }
            _ => Err(BookingError::UnknownOperation(self.op)),
        }
    }
}

/// Output row describing the result of one request.
///
/// Fields: `op, user, booking, room, status, detail`
#[derive(Debug, Serialize)]
struct ResultRecord {
    op: String,
    user: Option<u32>,
    booking: Option<u32>,
    room: Option<u32>,
    status: &'static str,
    detail: String,
}

/// Process booking requests from a CSV reader, writing one CSV row per request.
///
/// # CSV Format
///
/// Expected columns: `op, user, booking, room`
/// - `op`: Operation (get, create, update)
/// - `user`: Requesting user ID (u32)
/// - `booking`: Booking ID (required for update)
/// - `room`: Room ID (required for create and update)
///
/// # Example
///
/// ```csv
/// op,user,booking,room
/// create,1,,3
/// update,1,1,4
/// get,1,,
/// ```
///
/// # Errors
///
/// Returns a CSV error if reading the input or writing the output fails.
/// Rejected and malformed requests are reported as rows and never stop the batch.
pub fn process_requests<E, R, W>(
    engine: &BookingEngine<E>,
    reader: R,
    writer: W,
) -> Result<(), csv::Error>
where
    E: EntityStore,
    R: Read,
    W: Write,
{
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All) // Handle whitespace in fields like " create "
        .flexible(true) // Allow missing trailing columns
        .has_headers(true)
        .from_reader(reader);
    let mut wtr = Writer::from_writer(writer);

    for result in rdr.deserialize::<CsvRecord>() {
        let row = match result {
            Ok(record) => process_record(engine, record),
            Err(e) => {
                tracing::warn!(error = %e, "malformed request row");
                ResultRecord {
                    op: String::new(),
                    user: None,
                    booking: None,
                    room: None,
                    status: "invalid_input",
                    detail: e.to_string(),
                }
            }
        };
        wtr.serialize(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

fn process_record<E: EntityStore>(
    engine: &BookingEngine<E>,
    record: CsvRecord,
) -> ResultRecord {
    let raw_op = record.op.to_lowercase();
    let (user, booking, room) = (record.user, record.booking, record.room);

    let (op, result) = match record.into_request() {
        Ok(request) => (request.operation().to_string(), engine.process(request)),
        Err(e) => (raw_op, Err(e)),
    };

    let (booking, room, status, detail) = match result {
        Ok(BookingOutcome::Found(view)) => (
            Some(view.id.0),
            Some(view.room.id.0),
            "ok",
            view.room.name,
        ),
        Ok(BookingOutcome::Created(created)) => (
            Some(created.id.0),
            Some(created.room_id.0),
            "ok",
            "created".to_string(),
        ),
        Ok(BookingOutcome::Updated) => (booking, room, "ok", "updated".to_string()),
        Err(e) => (booking, room, e.kind().as_str(), e.to_string()),
    };

    ResultRecord {
        op,
        user: Some(user),
        booking,
        room,
        status,
        detail,
    }
}
