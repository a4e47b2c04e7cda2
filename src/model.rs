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

//! Entities read and written by the booking engine.
//!
//! Rows mirror the backing store. The composite types ([`TicketWithType`],
//! [`BookingWithRoom`]) are produced by single join-style lookups so the
//! engine never stitches related rows together itself.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use hotel_booking_rs::{Booking, BookingId, BookingView, BookingWithRoom, HotelId, Room, RoomId, UserId};
//!
//! let now = Utc::now();
//! let room = Room::new(RoomId(1), HotelId(1), "101", 2, now);
//! let booking = Booking::new(BookingId(9), UserId(4), room.id, now);
//! let view = BookingView::from(BookingWithRoom { booking, room });
//!
//! let json = serde_json::to_value(&view).unwrap();
//! assert_eq!(json["id"], 9);
//! assert!(json.get("userId").is_none());
//! ```

use crate::base::{BookingId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's registration for the event. Prerequisite to holding a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
}

/// Ticket category reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: Decimal,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// Payment state of a ticket. Only the payment flow moves it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub ticket_type_id: TicketTypeId,
    pub status: TicketStatus,
}

/// A ticket joined with its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketWithType {
    pub ticket: Ticket,
    pub ticket_type: TicketType,
}

impl TicketWithType {
    /// Paid, in-person, and hotel-inclusive.
    pub fn grants_hotel_stay(&self) -> bool {
        self.ticket.status == TicketStatus::Paid
            && !self.ticket_type.is_remote
            && self.ticket_type.includes_hotel
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub image: String,
}

/// A hotel room.
///
/// `capacity` counts the slots still free at the time of reading, not the
/// room's total size. The engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    pub fn new(
        id: RoomId,
        hotel_id: HotelId,
        name: impl Into<String>,
        capacity: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_vacancy(&self) -> bool {
        self.capacity > 0
    }
}

/// A user's reservation of one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(id: BookingId, user_id: UserId, room_id: RoomId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            room_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A booking joined with the room it reserves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWithRoom {
    pub booking: Booking,
    pub room: Room,
}

/// Outward read model of a booking.
///
/// Carries only the booking ID and the full room; foreign keys and
/// timestamps of the booking row are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingView {
    pub id: BookingId,
    #[serde(rename = "Room")]
    pub room: Room,
}

impl From<BookingWithRoom> for BookingView {
    fn from(joined: BookingWithRoom) -> Self {
        Self {
            id: joined.booking.id,
            room: joined.room,
        }
    }
}
