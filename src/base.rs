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

//! Core identifier types for users, tickets, rooms, and bookings.
//!
//! Every identifier wraps a `u32` and serializes as a bare number, matching
//! the integer primary keys of the backing store.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of an authenticated user.
    UserId
);

id_type!(
    /// Identifier of a user's event enrollment.
    EnrollmentId
);

id_type!(
    /// Identifier of a ticket category.
    TicketTypeId
);

id_type!(
    /// Identifier of a ticket held through an enrollment.
    TicketId
);

id_type!(
    /// Identifier of a hotel.
    HotelId
);

id_type!(
    /// Identifier of a hotel room.
    RoomId
);

id_type!(
    /// Identifier of a room booking.
    ///
    /// Booking IDs are unique across all users.
    BookingId
);
