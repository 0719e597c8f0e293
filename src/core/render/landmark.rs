//=========================================================================
// Landmarks
//=========================================================================
//
// Static world-space decorations, placed in screen space and culled to
// the viewport each frame.
//
//   screen_x = world_x - camera_x
//   visible  = screen_x > -width && screen_x < viewport_width + CULL_MARGIN
//
//=========================================================================

//=== Constants ===========================================================

/// Extra room past the right viewport edge before a landmark is culled.
pub const CULL_MARGIN: f64 = 100.0;

//=== Landmark ============================================================

/// Immutable decoration record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub id: &'static str,
    pub world_x: f64,
    pub asset: &'static str,
    pub width: f64,
    pub height: f64,
}

impl Landmark {
    /// Landmarks of the decorated world, ordered by `world_x`.
    pub fn defaults() -> Vec<Self> {
        const fn landmark(
            id: &'static str,
            world_x: f64,
            asset: &'static str,
            width: f64,
            height: f64,
        ) -> Landmark {
            Landmark { id, world_x, asset, width, height }
        }

        vec![
            landmark("well", 600.0, "landmarks/well.png", 120.0, 140.0),
            landmark("watchtower", 1500.0, "landmarks/watchtower.png", 160.0, 360.0),
            landmark("windmill", 2600.0, "landmarks/windmill.png", 240.0, 320.0),
            landmark("statue", 3800.0, "landmarks/statue.png", 140.0, 260.0),
            landmark("arch", 5200.0, "landmarks/arch.png", 300.0, 280.0),
            landmark("lighthouse", 7200.0, "landmarks/lighthouse.png", 180.0, 420.0),
        ]
    }

    pub fn screen_x(&self, camera_x: f64) -> f64 {
        self.world_x - camera_x
    }

    pub fn is_visible(&self, camera_x: f64, viewport_width: f64) -> bool {
        let screen_x = self.screen_x(camera_x);
        screen_x > -self.width && screen_x < viewport_width + CULL_MARGIN
    }
}

//=== LandmarkPlacement ===================================================

/// Screen placement of a visible landmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPlacement {
    pub id: &'static str,
    pub asset: &'static str,
    pub screen_x: f64,
    pub width: f64,
    pub height: f64,
}

/// Visible landmarks for this frame, in list order.
pub fn place_landmarks(
    landmarks: &[Landmark],
    camera_x: f64,
    viewport_width: f64,
) -> Vec<LandmarkPlacement> {
    landmarks
        .iter()
        .filter(|landmark| landmark.is_visible(camera_x, viewport_width))
        .map(|landmark| LandmarkPlacement {
            id: landmark.id,
            asset: landmark.asset,
            screen_x: landmark.screen_x(camera_x),
            width: landmark.width,
            height: landmark.height,
        })
        .collect()
}

//=========================================================================
// Unit Tests
//=========================================================================
