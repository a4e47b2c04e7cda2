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

//! Ticket eligibility for hotel bookings.

use crate::base::UserId;
use crate::error::BookingError;
use crate::model::TicketWithType;
use crate::store::EntityStore;

/// Confirms that `user_id` holds a ticket entitling them to a hotel room.
///
/// The user must be enrolled, the enrollment must carry a ticket, and the
/// ticket must be paid, in person, and hotel-inclusive.
///
/// # Errors
///
/// - [`BookingError::NoEnrollment`] - User has not enrolled.
/// - [`BookingError::NoTicket`] - Enrollment has no ticket.
/// - [`BookingError::TicketNotEligible`] - Ticket is reserved, remote, or excludes the hotel.
pub fn check_eligibility<S>(store: &S, user_id: UserId) -> Result<TicketWithType, BookingError>
where
    S: EntityStore + ?Sized,
{
    let enrollment = store
        .find_enrollment_by_user(user_id)
        .ok_or(BookingError::NoEnrollment)?;

    let ticket = store
        .find_ticket_by_enrollment(enrollment.id)
        .ok_or(BookingError::NoTicket)?;

    if !ticket.grants_hotel_stay() {
        tracing::debug!(
            %user_id,
            ticket_id = %ticket.ticket.id,
            status = ?ticket.ticket.status,
            is_remote = ticket.ticket_type.is_remote,
            includes_hotel = ticket.ticket_type.includes_hotel,
            "ticket does not grant a hotel stay"
        );
        return Err(BookingError::TicketNotEligible);
    }

    Ok(ticket)
}
