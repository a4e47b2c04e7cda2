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

use crate::availability::check_room_available;
use crate::base::{BookingId, RoomId, UserId};
use crate::eligibility::check_eligibility;
use crate::error::BookingError;
use crate::model::{Booking, BookingView};
use crate::request::{BookingOutcome, BookingRequest};
use crate::store::{EntityStore, MemoryStore};

/// Booking transition engine.
///
/// Authorizes booking reads and writes against an [`EntityStore`]. Each
/// operation runs its checks and then performs at most one store write.
pub struct BookingEngine<S = MemoryStore> {
    store: S,
}

impl BookingEngine<MemoryStore> {
    /// Creates an engine over an empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl<S: EntityStore> BookingEngine<S> {
    pub fn with_store(store: S) -> Self {
        BookingEngine { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Processes a booking request on behalf of its user.
    ///
    /// | Request | Behavior |
    /// |---------|----------|
    /// | Get | Returns the user's booking with its room |
    /// | Create | Checks ticket and room, then books the room |
    /// | Update | Checks ownership and room, then moves the booking |
    ///
    /// # Errors
    ///
    /// See [`BookingEngine::get_booking`], [`BookingEngine::create_booking`]
    /// and [`BookingEngine::update_booking`].
    pub fn process(&self, request: BookingRequest) -> Result<BookingOutcome, BookingError> {
        match request {
            BookingRequest::Get { user_id } => self.get_booking(user_id).map(BookingOutcome::Found),
            BookingRequest::Create { user_id, room_id } => self
                .create_booking(user_id, room_id)
                .map(BookingOutcome::Created),
            BookingRequest::Update {
                user_id,
                booking_id,
                room_id,
            } => self
                .update_booking(user_id, booking_id, room_id)
                .map(|()| BookingOutcome::Updated),
        }
    }

    /// Returns the user's booking.
    ///
    /// # Errors
    ///
    /// - [`BookingError::BookingNotFound`] - User has no booking.
    #[tracing::instrument(skip(self))]
    pub fn get_booking(&self, user_id: UserId) -> Result<BookingView, BookingError> {
        let joined = self
            .store
            .find_booking_by_user(user_id)
            .ok_or(BookingError::BookingNotFound)?;
        Ok(BookingView::from(joined))
    }

    /// Books `room_id` for `user_id`.
    ///
    /// Eligibility is checked before the room so an ineligible user learns
    /// nothing about rooms. The room's capacity is not decremented.
    ///
    /// # Errors
    ///
    /// - [`BookingError::NoEnrollment`], [`BookingError::NoTicket`],
    ///   [`BookingError::TicketNotEligible`] - User may not book a hotel room.
    /// - [`BookingError::RoomNotFound`] - Room does not exist.
    /// - [`BookingError::RoomFull`] - Room has no vacancy.
    /// - [`BookingError::AlreadyBooked`] - User already holds a booking.
    #[tracing::instrument(skip(self))]
    pub fn create_booking(&self, user_id: UserId, room_id: RoomId) -> Result<Booking, BookingError> {
        check_eligibility(&self.store, user_id).inspect_err(reject)?;
        check_room_available(&self.store, room_id).inspect_err(reject)?;

        let booking = self
            .store
            .create_booking(user_id, room_id)
            .inspect_err(reject)?;
        tracing::debug!(booking_id = %booking.id, "booking created");
        Ok(booking)
    }

    /// Moves the user's booking to `room_id`.
    ///
    /// Ticket eligibility is not re-checked: it was established when the
    /// booking was created.
    ///
    /// # Errors
    ///
    /// - [`BookingError::BookingNotOwned`] - Booking is missing or belongs to someone else.
    /// - [`BookingError::RoomNotFound`] - Room does not exist.
    /// - [`BookingError::RoomFull`] - Room has no vacancy.
    #[tracing::instrument(skip(self))]
    pub fn update_booking(
        &self,
        user_id: UserId,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> Result<(), BookingError> {
        // A missing booking and someone else's booking must look the same.
        let booking = self
            .store
            .find_booking_by_user_and_id(user_id, booking_id)
            .ok_or(BookingError::BookingNotOwned)
            .inspect_err(reject)?;
        check_room_available(&self.store, room_id).inspect_err(reject)?;

        self.store
            .update_booking_room(booking.id, room_id)
            .inspect_err(reject)?;
        tracing::debug!(from_room = %booking.room_id, "booking moved");
        Ok(())
    }
}

impl Default for BookingEngine<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

fn reject(error: &BookingError) {
    tracing::debug!(kind = %error.kind(), %error, "booking request rejected");
}
