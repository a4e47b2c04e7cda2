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

//! Error types for booking operations.

use std::fmt;
use thiserror::Error;

/// Booking operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// User has no booking to return
    #[error("booking not found")]
    BookingNotFound,

    /// Requested room does not exist
    #[error("room not found")]
    RoomNotFound,

    /// User has not enrolled in the event
    #[error("user has no enrollment")]
    NoEnrollment,

    /// Enrollment has no ticket attached
    #[error("enrollment has no ticket")]
    NoTicket,

    /// Ticket is unpaid, remote, or does not include a hotel stay
    #[error("ticket is not eligible for a hotel booking")]
    TicketNotEligible,

    /// Room has no free capacity left
    #[error("room has no vacancy")]
    RoomFull,

    /// Booking does not exist or belongs to another user
    #[error("booking does not exist or is not owned by this user")]
    BookingNotOwned,

    /// User already holds a booking
    #[error("user already has a booking")]
    AlreadyBooked,

    /// Store has no booking IDs left to hand out
    #[error("booking IDs exhausted")]
    BookingIdsExhausted,

    /// Create or update request lacks a room ID
    #[error("missing room ID")]
    MissingRoomId,

    /// Update request lacks a booking ID
    #[error("missing booking ID")]
    MissingBookingId,

    /// Request names an operation that does not exist
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
}

/// Transport-independent classification of a [`BookingError`].
///
/// Adapters map these onto their own status codes (404, 403, 400, 503 for HTTP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    InvalidInput,
    /// The store cannot take the write; not the requester's fault.
    Unavailable,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Forbidden => "forbidden",
            Self::InvalidInput => "invalid_input",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BookingError {
    /// Returns the failure kind an adapter should report.
    ///
    /// A missing booking on update is `Forbidden`, not `NotFound`, so callers
    /// cannot probe for other users' bookings.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BookingNotFound | Self::RoomNotFound => ErrorKind::NotFound,
            Self::NoEnrollment
            | Self::NoTicket
            | Self::TicketNotEligible
            | Self::RoomFull
            | Self::BookingNotOwned
            | Self::AlreadyBooked => ErrorKind::Forbidden,
            Self::MissingRoomId | Self::MissingBookingId | Self::UnknownOperation(_) => {
                ErrorKind::InvalidInput
            }
            Self::BookingIdsExhausted => ErrorKind::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BookingError, ErrorKind};

    #[test]
    fn error_display_messages() {
        assert_eq!(BookingError::BookingNotFound.to_string(), "booking not found");
        assert_eq!(BookingError::RoomNotFound.to_string(), "room not found");
        assert_eq!(BookingError::NoEnrollment.to_string(), "user has no enrollment");
        assert_eq!(BookingError::NoTicket.to_string(), "enrollment has no ticket");
        assert_eq!(
            BookingError::TicketNotEligible.to_string(),
            "ticket is not eligible for a hotel booking"
        );
        assert_eq!(BookingError::RoomFull.to_string(), "room has no vacancy");
        assert_eq!(
            BookingError::BookingNotOwned.to_string(),
            "booking does not exist or is not owned by this user"
        );
        assert_eq!(BookingError::AlreadyBooked.to_string(), "user already has a booking");
        assert_eq!(BookingError::BookingIdsExhausted.to_string(), "booking IDs exhausted");
        assert_eq!(BookingError::MissingRoomId.to_string(), "missing room ID");
        assert_eq!(BookingError::MissingBookingId.to_string(), "missing booking ID");
        assert_eq!(
            BookingError::UnknownOperation("delete".into()).to_string(),
            "unknown operation 'delete'"
        );
    }

    #[test]
    fn eligibility_failures_are_forbidden() {
        for error in [
            BookingError::NoEnrollment,
            BookingError::NoTicket,
            BookingError::TicketNotEligible,
        ] {
            assert_eq!(error.kind(), ErrorKind::Forbidden, "{error}");
        }
    }

    #[test]
    fn room_failures_split_between_not_found_and_forbidden() {
        assert_eq!(BookingError::RoomNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(BookingError::RoomFull.kind(), ErrorKind::Forbidden);
    }

    #[test]
    fn ownership_failure_hides_existence() {
        assert_eq!(BookingError::BookingNotOwned.kind(), ErrorKind::Forbidden);
        assert_eq!(BookingError::BookingNotFound.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn request_shape_failures_are_invalid_input() {
        assert_eq!(BookingError::MissingRoomId.kind(), ErrorKind::InvalidInput);
        assert_eq!(BookingError::MissingBookingId.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            BookingError::UnknownOperation(String::new()).kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn exhausted_ids_are_unavailable() {
        assert_eq!(BookingError::BookingIdsExhausted.kind(), ErrorKind::Unavailable);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
        assert_eq!(ErrorKind::Forbidden.to_string(), "forbidden");
        assert_eq!(ErrorKind::InvalidInput.to_string(), "invalid_input");
        assert_eq!(ErrorKind::Unavailable.to_string(), "unavailable");
    }

    #[test]
    fn errors_are_cloneable() {
        let error = BookingError::RoomFull;
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
