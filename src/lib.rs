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

//! # Hotel Booking
//!
//! This library decides whether event attendees may book, view, or change a
//! hotel room reservation, based on their enrollment, ticket, and the room's
//! remaining capacity.
//!
//! ## Core Components
//!
//! - [`BookingEngine`]: Authorizes booking reads, creations, and room changes
//! - [`check_eligibility`]: Ticket checks (paid, in person, hotel included)
//! - [`check_room_available`]: Room existence and vacancy checks
//! - [`EntityStore`]: Storage seam, with the in-memory [`MemoryStore`]
//! - [`BookingError`]: Failure causes, classified by [`ErrorKind`]
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use hotel_booking_rs::{
//!     BookingEngine, Enrollment, EnrollmentId, HotelId, Room, RoomId, Ticket, TicketId,
//!     TicketStatus, TicketType, TicketTypeId, UserId,
//! };
//! use rust_decimal_macros::dec;
//!
//! let engine = BookingEngine::new();
//! let store = engine.store();
//! store.add_enrollment(Enrollment { id: EnrollmentId(1), user_id: UserId(1), name: "Ada".into() });
//! store.add_ticket_type(TicketType {
//!     id: TicketTypeId(1),
//!     name: "In person + hotel".into(),
//!     price: dec!(600.00),
//!     is_remote: false,
//!     includes_hotel: true,
//! });
//! store.add_ticket(Ticket {
//!     id: TicketId(1),
//!     enrollment_id: EnrollmentId(1),
//!     ticket_type_id: TicketTypeId(1),
//!     status: TicketStatus::Paid,
//! });
//! store.add_room(Room::new(RoomId(1), HotelId(1), "101", 5, Utc::now()));
//!
//! // Book the room
//! let booking = engine.create_booking(UserId(1), RoomId(1)).unwrap();
//!
//! // Read it back
//! let view = engine.get_booking(UserId(1)).unwrap();
//! assert_eq!(view.id, booking.id);
//! assert_eq!(view.room.id, RoomId(1));
//! ```
//!
//! ## Thread Safety
//!
//! The engine takes `&self` everywhere and can be shared across threads. It
//! holds no lock across a check and its write; the store only guarantees that
//! a user never ends up with two bookings.

mod availability;
mod base;
mod eligibility;
mod engine;
pub mod error;
pub mod fixture;
pub mod model;
mod request;
pub mod store;

pub use availability::check_room_available;
pub use base::{BookingId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId};
pub use eligibility::check_eligibility;
pub use engine::BookingEngine;
pub use error::{BookingError, ErrorKind};
pub use fixture::Fixture;
pub use model::{
    Booking, BookingView, BookingWithRoom, Enrollment, Hotel, Room, Ticket, TicketStatus,
    TicketType, TicketWithType,
};
pub use request::{BookingOutcome, BookingRequest};
pub use store::{EntityStore, MemoryStore};
