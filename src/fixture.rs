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

//! Seed data for a [`MemoryStore`].
//!
//! A fixture is a JSON document holding the reference data the booking
//! engine reads but never writes:
//!
//! ```json
//! {
//!   "ticketTypes": [{"id": 1, "name": "Hotel", "price": "600.00", "isRemote": false, "includesHotel": true}],
//!   "hotels": [{"id": 1, "name": "Driven Resort", "image": "resort.png"}],
//!   "rooms": [{"id": 1, "hotelId": 1, "name": "101", "capacity": 3}],
//!   "enrollments": [{"id": 1, "userId": 1, "name": "Ada"}],
//!   "tickets": [{"id": 1, "enrollmentId": 1, "ticketTypeId": 1, "status": "PAID"}]
//! }
//! ```
//!
//! Every section is optional. Rooms must name a hotel from the same
//! fixture or one already in the store; others are skipped.

use crate::base::{HotelId, RoomId};
use crate::model::{Enrollment, Hotel, Room, Ticket, TicketType};
use crate::store::MemoryStore;
use chrono::Utc;
use serde::Deserialize;
use std::io::Read;

/// Room row without timestamps; they are stamped at load time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSeed {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fixture {
    pub ticket_types: Vec<TicketType>,
    pub hotels: Vec<Hotel>,
    pub rooms: Vec<RoomSeed>,
    pub enrollments: Vec<Enrollment>,
    pub tickets: Vec<Ticket>,
}

impl Fixture {
    /// Parses a fixture from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if the document is malformed or a row is missing
    /// a required field.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Loads every row into `store`, replacing rows with the same IDs.
    ///
    /// Rooms of unknown hotels are skipped with a warning.
    pub fn seed(self, store: &MemoryStore) {
        let now = Utc::now();
        tracing::debug!(
            ticket_types = self.ticket_types.len(),
            hotels = self.hotels.len(),
            rooms = self.rooms.len(),
            enrollments = self.enrollments.len(),
            tickets = self.tickets.len(),
            "seeding store"
        );

        for ticket_type in self.ticket_types {
            store.add_ticket_type(ticket_type);
        }
        for hotel in self.hotels {
            store.add_hotel(hotel);
        }
        for room in self.rooms {
            if store.find_hotel(room.hotel_id).is_none() {
                tracing::warn!(
                    room_id = %room.id,
                    hotel_id = %room.hotel_id,
                    "skipping room of unknown hotel"
                );
                continue;
            }
            store.add_room(Room::new(room.id, room.hotel_id, room.name, room.capacity, now));
        }
        for enrollment in self.enrollments {
            store.add_enrollment(enrollment);
        }
        for ticket in self.tickets {
            store.add_ticket(ticket);
        }
    }
}
