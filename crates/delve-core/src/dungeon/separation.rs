//! Room separation and discarding
//!
//! Separation is a force-directed relaxation: every conflict (an overlap
//! with another room, or crossing the grid edge) contributes a push, the
//! pushes are averaged, scaled by an overshoot factor and rounded away
//! from zero. All rooms move at once at the end of a pass.

use log::debug;

use super::room::Room;

/// Round away from zero to the next integer
pub fn symmetric_ceil(value: f32) -> f32 {
    let res = value.abs().ceil();
    if value > 0.0 { res } else { -res }
}

/// Push applied to `rooms[i]` by its overlap with `rooms[j]`
///
/// Only the cheaper axis is pushed. When both rooms share a doubled center
/// on that axis the lower-indexed room goes negative so that identical
/// rectangles separate.
fn pair_push(rooms: &[Room], i: usize, j: usize) -> Option<(i32, i32)> {
    let (a, b) = (&rooms[i], &rooms[j]);
    let (mut dx, mut dy) = a.overlap(b)?;

    if i < j {
        let twice_x = |r: &Room| 2 * r.left() + r.width() as i32;
        let twice_y = |r: &Room| 2 * r.top() + r.height() as i32;
        if twice_x(a) == twice_x(b) {
            dx = -dx;
        }
        if twice_y(a) == twice_y(b) {
            dy = -dy;
        }
    }

    if dx.abs() <= dy.abs() {
        Some((dx, 0))
    } else {
        Some((0, dy))
    }
}

/// Run one separation pass over `rooms`
///
/// Returns the number of conflicts found; zero means the layout is
/// already settled and nothing moved.
pub fn separation_pass(rooms: &mut [Room], width: u32, height: u32, overshoot: f32) -> usize {
    let mut moves = Vec::with_capacity(rooms.len());
    let mut total = 0;

    for i in 0..rooms.len() {
        let (mut sum_x, mut sum_y, mut conflicts) = (0i32, 0i32, 0u32);
        for j in (0..rooms.len()).filter(|&j| j != i) {
            if let Some((dx, dy)) = pair_push(rooms, i, j) {
                sum_x += dx;
                sum_y += dy;
                conflicts += 1;
            }
        }
        if let Some((dx, dy)) = rooms[i].out_of_bounds(width, height) {
            sum_x += dx;
            sum_y += dy;
            conflicts += 1;
        }

        if conflicts == 0 {
            moves.push((0, 0));
            continue;
        }
        total += conflicts as usize;
        let scale = |sum: i32| symmetric_ceil(sum as f32 / conflicts as f32 * overshoot) as i32;
        moves.push((scale(sum_x), scale(sum_y)));
    }

    for (room, (dx, dy)) in rooms.iter_mut().zip(moves) {
        room.translate(dx, dy);
    }
    total
}

/// Drop rooms until the rest fit the grid without overlapping
///
/// Out-of-bounds rooms go first. Then the room with the most overlaps is
/// removed (the later one on ties) and overlaps are recounted, until none
/// remain. Returns the number of rooms removed.
pub fn discard_conflicts(rooms: &mut Vec<Room>, width: u32, height: u32) -> usize {
    let before = rooms.len();
    rooms.retain(|r| r.within(width, height));
    let out_of_bounds = before - rooms.len();

    loop {
        let counts: Vec<usize> = (0..rooms.len())
            .map(|i| {
                (0..rooms.len())
                    .filter(|&j| j != i && rooms[i].intersects(&rooms[j]))
                    .count()
            })
            .collect();

        let mut worst: Option<(usize, usize)> = None;
        for (i, &count) in counts.iter().enumerate() {
            if count > 0 && worst.is_none_or(|(_, best)| count >= best) {
                worst = Some((i, count));
            }
        }
        match worst {
            Some((i, _)) => {
                rooms.remove(i);
            }
            None => break,
        }
    }

    debug!(
        "Discarded {} rooms out of bounds and {} overlapping, {} remain",
        out_of_bounds,
        before - out_of_bounds - rooms.len(),
        rooms.len()
    );
    before - rooms.len()
}
