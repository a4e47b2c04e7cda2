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

use crate::base::{BookingId, RoomId, UserId};
use crate::model::{Booking, BookingView};
use serde::{Deserialize, Serialize};

/// A booking request on behalf of an authenticated user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum BookingRequest {
    Get {
        user_id: UserId,
    },
    Create {
        user_id: UserId,
        room_id: RoomId,
    },
    Update {
        user_id: UserId,
        booking_id: BookingId,
        room_id: RoomId,
    },
}

/// Successful result of a [`BookingRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Found(BookingView),
    Created(Booking),
    Updated,
}

impl BookingRequest {
    pub fn user_id(&self) -> UserId {
        match self {
            Self::Get { user_id } => *user_id,
            Self::Create { user_id, .. } => *user_id,
            Self::Update { user_id, .. } => *user_id,
        }
    }

    /// Lowercase operation name, as used in the `op` tag.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Get { .. } => "get",
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
        }
    }
}
