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

//! Benchmarks for the booking engine.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Single-threaded create, update, and get
//! - Rejection paths (ineligible ticket, full room)
//! - Multi-threaded booking across many users

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hotel_booking_rs::{
    BookingEngine, Enrollment, EnrollmentId, HotelId, Room, RoomId, Ticket, TicketId,
    TicketStatus, TicketType, TicketTypeId, UserId,
};
use rayon::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_engine(users: u32, rooms: u32, capacity: u32) -> BookingEngine {
    let engine = BookingEngine::new();
    let store = engine.store();
    store.add_ticket_type(TicketType {
        id: TicketTypeId(1),
        name: "In person + hotel".to_string(),
        price: Decimal::new(60000, 2),
        is_remote: false,
        includes_hotel: true,
    });
    for user in 1..=users {
        store.add_enrollment(Enrollment {
            id: EnrollmentId(user),
            user_id: UserId(user),
            name: format!("attendee {user}"),
        });
        store.add_ticket(Ticket {
            id: TicketId(user),
            enrollment_id: EnrollmentId(user),
            ticket_type_id: TicketTypeId(1),
            status: TicketStatus::Paid,
        });
    }
    let now = Utc::now();
    for room in 1..=rooms {
        store.add_room(Room::new(RoomId(room), HotelId(1), format!("{room}"), capacity, now));
    }
    engine
}

// =============================================================================
// Single-Threaded Benchmarks
// =============================================================================

fn bench_create_booking(c: &mut Criterion) {
    c.bench_function("create_booking", |b| {
        b.iter_batched(
            || make_engine(1, 1, 5),
            |engine| {
                engine
                    .create_booking(black_box(UserId(1)), black_box(RoomId(1)))
                    .unwrap();
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_update_booking(c: &mut Criterion) {
    let engine = make_engine(1, 2, 5);
    let booking = engine.create_booking(UserId(1), RoomId(1)).unwrap();
    let mut room = 1u32;

    c.bench_function("update_booking", |b| {
        b.iter(|| {
            room = room % 2 + 1;
            engine
                .update_booking(UserId(1), booking.id, black_box(RoomId(room)))
                .unwrap();
        })
    });
}

fn bench_get_booking(c: &mut Criterion) {
    let engine = make_engine(1, 1, 5);
    engine.create_booking(UserId(1), RoomId(1)).unwrap();

    c.bench_function("get_booking", |b| {
        b.iter(|| black_box(engine.get_booking(black_box(UserId(1))).unwrap()))
    });
}

fn bench_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejections");

    let engine = make_engine(1, 1, 0);
    group.bench_function("room_full", |b| {
        b.iter(|| {
            let _ = black_box(engine.create_booking(UserId(1), RoomId(1)));
        })
    });

    group.bench_function("no_enrollment", |b| {
        b.iter(|| {
            let _ = black_box(engine.create_booking(UserId(2), RoomId(1)));
        })
    });

    group.finish();
}

fn bench_booking_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking_throughput");

    for count in [100u32, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter_batched(
                || make_engine(count, 10, 1_000),
                |engine| {
                    for user in 1..=count {
                        engine
                            .create_booking(UserId(user), RoomId(user % 10 + 1))
                            .unwrap();
                    }
                    black_box(&engine);
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

// =============================================================================
// Multi-Threaded Benchmarks
// =============================================================================

fn bench_parallel_bookings(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_bookings");

    for count in [1_000u32, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter_batched(
                || make_engine(count, 10, 1_000),
                |engine| {
                    (1..=count).into_par_iter().for_each(|user| {
                        engine
                            .create_booking(UserId(user), RoomId(user % 10 + 1))
                            .unwrap();
                    });
                    black_box(&engine);
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_parallel_reads(c: &mut Criterion) {
    let users = 1_000u32;
    let engine = make_engine(users, 10, 1_000);
    for user in 1..=users {
        engine
            .create_booking(UserId(user), RoomId(user % 10 + 1))
            .unwrap();
    }

    let mut group = c.benchmark_group("parallel_reads");
    group.throughput(Throughput::Elements(users as u64));
    group.bench_function("get_booking", |b| {
        b.iter(|| {
            (1..=users).into_par_iter().for_each(|user| {
                black_box(engine.get_booking(UserId(user)).unwrap());
            });
        })
    });
    group.finish();
}

criterion_group!(
    single_threaded,
    bench_create_booking,
    bench_update_booking,
    bench_get_booking,
    bench_rejections,
    bench_booking_throughput,
);

criterion_group!(multi_threaded, bench_parallel_bookings, bench_parallel_reads,);

criterion_main!(single_threaded, multi_threaded);
