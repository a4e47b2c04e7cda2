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

//! Entity storage consumed by the booking engine.
//!
//! [`EntityStore`] is the seam to persistence: point lookups plus the two
//! booking writes. [`MemoryStore`] is the in-process implementation used by
//! the CLI, tests, and benchmarks.

use crate::base::{BookingId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId};
use crate::error::BookingError;
use crate::model::{
    Booking, BookingWithRoom, Enrollment, Hotel, Room, Ticket, TicketType, TicketWithType,
};
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Storage operations required by the booking engine.
///
/// Lookups that join two rows (`find_booking_by_user`,
/// `find_ticket_by_enrollment`) behave as inner joins: a dangling reference
/// yields `None`.
pub trait EntityStore: Send + Sync {
    /// Returns the user's booking together with its room.
    fn find_booking_by_user(&self, user_id: UserId) -> Option<BookingWithRoom>;

    fn find_room(&self, room_id: RoomId) -> Option<Room>;

    /// Inserts a booking row.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::AlreadyBooked`] if the user already holds a
    /// booking. Implementations must make this check atomic with the insert.
    /// Returns [`BookingError::BookingIdsExhausted`] when no booking ID is left.
    fn create_booking(&self, user_id: UserId, room_id: RoomId) -> Result<Booking, BookingError>;

    /// Returns the booking only if it exists and belongs to `user_id`.
    fn find_booking_by_user_and_id(&self, user_id: UserId, booking_id: BookingId)
    -> Option<Booking>;

    /// Points an existing booking at another room.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::BookingNotFound`] if the booking vanished.
    fn update_booking_room(&self, booking_id: BookingId, room_id: RoomId)
    -> Result<(), BookingError>;

    fn find_enrollment_by_user(&self, user_id: UserId) -> Option<Enrollment>;

    /// Returns the enrollment's ticket together with its type.
    fn find_ticket_by_enrollment(&self, enrollment_id: EnrollmentId) -> Option<TicketWithType>;
}

/// Booking rows with a unique index on the owning user.
///
/// Both maps and the ID counter live under one lock so the index never
/// disagrees with the rows.
#[derive(Debug)]
struct BookingTable {
    rows: HashMap<BookingId, Booking>,
    by_user: HashMap<UserId, BookingId>,
    next_id: u32,
}

impl BookingTable {
    fn new() -> Self {
        Self {
            rows: HashMap::new(),
            by_user: HashMap::new(),
            next_id: 1,
        }
    }

    /// Hands out the next booking ID. `u32::MAX` is never issued.
    fn allocate_id(&mut self) -> Result<BookingId, BookingError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(BookingError::BookingIdsExhausted)?;
        Ok(BookingId(id))
    }
}

/// In-memory [`EntityStore`].
#[derive(Debug)]
pub struct MemoryStore {
    enrollments: DashMap<EnrollmentId, Enrollment>,
    /// Enrollment per user; one enrollment per user.
    enrollment_by_user: DashMap<UserId, EnrollmentId>,
    ticket_types: DashMap<TicketTypeId, TicketType>,
    tickets: DashMap<TicketId, Ticket>,
    /// Ticket per enrollment; one ticket per enrollment.
    ticket_by_enrollment: DashMap<EnrollmentId, TicketId>,
    hotels: DashMap<HotelId, Hotel>,
    rooms: DashMap<RoomId, Room>,
    bookings: Mutex<BookingTable>,
}

impl MemoryStore {
    /// Creates an empty store. Booking IDs start at 1.
    pub fn new() -> Self {
        Self {
            enrollments: DashMap::new(),
            enrollment_by_user: DashMap::new(),
            ticket_types: DashMap::new(),
            tickets: DashMap::new(),
            ticket_by_enrollment: DashMap::new(),
            hotels: DashMap::new(),
            rooms: DashMap::new(),
            bookings: Mutex::new(BookingTable::new()),
        }
    }

    /// Inserts or replaces an enrollment.
    ///
    /// Replacing an enrollment with one for a different user drops the
    /// previous user's index entry.
    pub fn add_enrollment(&self, enrollment: Enrollment) {
        let (id, user_id) = (enrollment.id, enrollment.user_id);
        if let Some(previous) = self.enrollments.insert(id, enrollment) {
            if previous.user_id != user_id {
                self.enrollment_by_user
                    .remove_if(&previous.user_id, |_, indexed| *indexed == id);
            }
        }
        self.enrollment_by_user.insert(user_id, id);
    }

    pub fn add_ticket_type(&self, ticket_type: TicketType) {
        self.ticket_types.insert(ticket_type.id, ticket_type);
    }

    /// Inserts or replaces a ticket. Replacing is how tests model the
    /// external payment flow changing a ticket's status.
    pub fn add_ticket(&self, ticket: Ticket) {
        let (id, enrollment_id) = (ticket.id, ticket.enrollment_id);
        if let Some(previous) = self.tickets.insert(id, ticket) {
            if previous.enrollment_id != enrollment_id {
                self.ticket_by_enrollment
                    .remove_if(&previous.enrollment_id, |_, indexed| *indexed == id);
            }
        }
        self.ticket_by_enrollment.insert(enrollment_id, id);
    }

    pub fn add_hotel(&self, hotel: Hotel) {
        self.hotels.insert(hotel.id, hotel);
    }

    pub fn add_room(&self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    /// Looks a hotel up by ID. Fixtures use it to reject rooms of unknown hotels.
    pub fn find_hotel(&self, hotel_id: HotelId) -> Option<Hotel> {
        self.hotels.get(&hotel_id).map(|hotel| hotel.value().clone())
    }

    /// Looks a booking up by ID regardless of owner.
    pub fn find_booking(&self, booking_id: BookingId) -> Option<Booking> {
        self.bookings.lock().rows.get(&booking_id).cloned()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.lock().rows.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore for MemoryStore {
    fn find_booking_by_user(&self, user_id: UserId) -> Option<BookingWithRoom> {
        // Copy the row out before touching the room map so the booking lock
        // is never held across a DashMap shard lock.
        let booking = {
            let table = self.bookings.lock();
            let booking_id = table.by_user.get(&user_id)?;
            table.rows.get(booking_id)?.clone()
        };
        let room = self.find_room(booking.room_id)?;
        Some(BookingWithRoom { booking, room })
    }

    fn find_room(&self, room_id: RoomId) -> Option<Room> {
        self.rooms.get(&room_id).map(|room| room.value().clone())
    }

    fn create_booking(&self, user_id: UserId, room_id: RoomId) -> Result<Booking, BookingError> {
        let mut table = self.bookings.lock();
        if table.by_user.contains_key(&user_id) {
            return Err(BookingError::AlreadyBooked);
        }
        let booking_id = table.allocate_id()?;
        let booking = Booking::new(booking_id, user_id, room_id, Utc::now());
        table.by_user.insert(user_id, booking_id);
        table.rows.insert(booking_id, booking.clone());
        tracing::trace!(%booking_id, %user_id, %room_id, "booking row inserted");
        Ok(booking)
    }

    fn find_booking_by_user_and_id(
        &self,
        user_id: UserId,
        booking_id: BookingId,
    ) -> Option<Booking> {
        self.bookings
            .lock()
            .rows
            .get(&booking_id)
            .filter(|booking| booking.user_id == user_id)
            .cloned()
    }

    fn update_booking_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> Result<(), BookingError> {
        let mut table = self.bookings.lock();
        let booking = table
            .rows
            .get_mut(&booking_id)
            .ok_or(BookingError::BookingNotFound)?;
        booking.room_id = room_id;
        booking.updated_at = Utc::now();
        tracing::trace!(%booking_id, %room_id, "booking row updated");
        Ok(())
    }

    fn find_enrollment_by_user(&self, user_id: UserId) -> Option<Enrollment> {
        let enrollment_id = *self.enrollment_by_user.get(&user_id)?;
        self.enrollments
            .get(&enrollment_id)
            .filter(|enrollment| enrollment.user_id == user_id)
            .map(|enrollment| enrollment.value().clone())
    }

    fn find_ticket_by_enrollment(&self, enrollment_id: EnrollmentId) -> Option<TicketWithType> {
        let ticket_id = *self.ticket_by_enrollment.get(&enrollment_id)?;
        let ticket = self.tickets.get(&ticket_id)?.value().clone();
        if ticket.enrollment_id != enrollment_id {
            return None;
        }
        let ticket_type = self
            .ticket_types
            .get(&ticket.ticket_type_id)?
            .value()
            .clone();
        Some(TicketWithType {
            ticket,
            ticket_type,
        })
    }
}
