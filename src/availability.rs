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

use crate::base::RoomId;
use crate::error::BookingError;
use crate::model::Room;
use crate::store::EntityStore;

/// Confirms that `room_id` exists and still has a free slot.
///
/// Capacity is only read; nothing is reserved by a successful check.
///
/// # Errors
///
/// - [`BookingError::RoomNotFound`] - No room with this ID.
/// - [`BookingError::RoomFull`] - Room capacity is zero.
pub fn check_room_available<S>(store: &S, room_id: RoomId) -> Result<Room, BookingError>
where
    S: EntityStore + ?Sized,
{
    let room = store.find_room(room_id).ok_or(BookingError::RoomNotFound)?;

    if !room.has_vacancy() {
        tracing::debug!(%room_id, "room has no vacancy");
        return Err(BookingError::RoomFull);
    }

    Ok(room)
}
