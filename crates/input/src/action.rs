use cubeworld_common::Vector2D;

/// Magnitude of the acceleration a held direction adds each frame.
pub const ACCEL_IMPULSE: f32 = 100.0;

/// One of the four movement directions on the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Acceleration contributed while this direction is held.
    pub fn impulse(self) -> Vector2D {
        match self {
            Direction::Up => Vector2D::new(0.0, ACCEL_IMPULSE),
            Direction::Down => Vector2D::new(0.0, -ACCEL_IMPULSE),
            Direction::Left => Vector2D::new(-ACCEL_IMPULSE, 0.0),
            Direction::Right => Vector2D::new(ACCEL_IMPULSE, 0.0),
        }
    }
}

/// Pressed/released state of the four direction keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, direction: Direction, pressed: bool) {
        *self.slot(direction) = pressed;
    }

    /// Drop every held direction. Releases that happen while the window is
    /// unfocused never arrive as events.
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Sum of the impulses for every held direction, in the fixed order
    /// up, down, left, right.
    pub fn acceleration(&self) -> Vector2D {
        Direction::ALL
            .iter()
            .filter(|d| self.is_pressed(**d))
            .fold(Vector2D::ZERO, |acc, d| acc.add(d.impulse()))
    }

    fn slot(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_held_is_zero() {
        assert_eq!(ControlState::new().acceleration(), Vector2D::ZERO);
    }

    #[test]
    fn single_directions() {
        for d in Direction::ALL {
            let mut c = ControlState::new();
            c.set(d, true);
            assert_eq!(c.acceleration(), d.impulse());
        }
        assert_eq!(Direction::Up.impulse(), Vector2D::new(0.0, 100.0));
        assert_eq!(Direction::Left.impulse(), Vector2D::new(-100.0, 0.0));
    }

    #[test]
    fn diagonal_is_not_normalized() {
        let mut c = ControlState::new();
        c.set(Direction::Up, true);
        c.set(Direction::Right, true);
        assert_eq!(c.acceleration(), Vector2D::new(100.0, 100.0));
    }

    #[test]
    fn opposite_directions_cancel() {
        let mut c = ControlState::new();
        c.set(Direction::Left, true);
        c.set(Direction::Right, true);
        assert_eq!(c.acceleration(), Vector2D::ZERO);
    }

    #[test]
    fn release_clears() {
        let mut c = ControlState::new();
        c.set(Direction::Down, true);
        assert!(c.is_pressed(Direction::Down));
        c.set(Direction::Down, false);
        assert!(!c.is_pressed(Direction::Down));
        assert_eq!(c.acceleration(), Vector2D::ZERO);
    }

    #[test]
    fn release_all_stops_held_keys() {
        let mut c = ControlState::new();
        c.set(Direction::Up, true);
        c.set(Direction::Left, true);
        c.release_all();
        for d in Direction::ALL {
            assert!(!c.is_pressed(d));
        }
        assert_eq!(c.acceleration(), Vector2D::ZERO);
        assert_eq!(c, ControlState::new());
    }
}
