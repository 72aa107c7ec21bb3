use macroquad::math::{Vec3, vec3};

const DEFAULT_YAW: f32 = 25.0;

/// Camera orbits the grid: pan shifts the look-at point, zoom scales the
/// orbit distance, yaw rotates around the vertical axis (degrees).
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = whole grid in view
    pub yaw: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            yaw: DEFAULT_YAW,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.25, 10.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.25, 10.0);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Rotate around the vertical axis
    pub fn rotate(&mut self, degrees: f32) {
        self.yaw = (self.yaw + degrees).rem_euclid(360.0);
    }

    /// Eye position and look-at target for a grid spanning `extent`
    /// world units from the origin
    pub fn eye_and_target(&self, extent: Vec3) -> (Vec3, Vec3) {
        let target = extent * 0.5 + vec3(self.offset_x, self.offset_y, 0.0);
        let distance = extent.length() * 1.2 / self.zoom;
        let yaw = self.yaw.to_radians();
        let eye = target + vec3(yaw.sin(), 0.4, yaw.cos()) * distance;
        (eye, target)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
