//! Positions in the match world.

use skybot_protocol::wire_record;

wire_record! {
    /// Position on the map. `y` is the height; most commands only care
    /// about the ground plane, see [`Position::to_2d`].
    #[derive(Copy)]
    pub struct Position {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }
}

wire_record! {
    /// Position on the ground plane.
    #[derive(Copy)]
    pub struct Position2D {
        pub x: f64,
        pub y: f64,
    }
}

impl Position {
    /// Projects onto the ground plane. The 3D `z` axis becomes the 2D `y`.
    pub fn to_2d(self) -> Position2D {
        Position2D {
            x: self.x,
            y: self.z,
        }
    }
}

impl Position2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
