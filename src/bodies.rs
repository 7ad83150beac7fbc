/// A celestial body as authored in the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDescriptor {
    pub name: &'static str,
    pub radius: f32,
    pub distance: f32, // Orbital radius around the origin.
    pub speed: f32,    // Base angular speed (radians per normalized time unit).
    pub texture: &'static str,
    pub description: &'static str,
}

impl BodyDescriptor {
    /// Asset path of the body's texture, relative to the `assets` directory.
    pub fn texture_path(&self) -> String {
        texture_path(self.texture)
    }
}

pub fn texture_path(texture: &str) -> String {
    format!("images/{texture}")
}

pub const SUN_RADIUS: f32 = 3.0;
pub const SUN_GLOW_RADIUS: f32 = 3.5;
pub const SUN_TEXTURE: &str = "sun.jpg";

pub const PLANETS: [BodyDescriptor; 8] = [
    BodyDescriptor {
        name: "Mercury",
        radius: 0.2,
        distance: 5.0,
        speed: 0.04,
        texture: "mercury.jpg",
        description: "The smallest planet in our solar system and closest to the Sun.",
    },
    BodyDescriptor {
        name: "Venus",
        radius: 0.4,
        distance: 7.0,
        speed: 0.03,
        texture: "venus.jpg",
        description: "Similar in size to Earth, but with a toxic atmosphere of carbon dioxide.",
    },
    BodyDescriptor {
        name: "Earth",
        radius: 0.5,
        distance: 9.0,
        speed: 0.02,
        texture: "earth.jpg",
        description: "Our home planet, the only known place in the universe confirmed to host life.",
    },
    BodyDescriptor {
        name: "Mars",
        radius: 0.3,
        distance: 11.0,
        speed: 0.018,
        texture: "mars.jpg",
        description: "The Red Planet, home to the tallest mountain in the solar system.",
    },
    BodyDescriptor {
        name: "Jupiter",
        radius: 1.0,
        distance: 14.0,
        speed: 0.01,
        texture: "jupiter.jpg",
        description: "The largest planet in our solar system, a gas giant with a Great Red Spot.",
    },
    BodyDescriptor {
        name: "Saturn",
        radius: 0.9,
        distance: 17.0,
        speed: 0.008,
        texture: "saturn.jpg",
        description: "Famous for its beautiful rings made of ice and rock particles.",
    },
    BodyDescriptor {
        name: "Uranus",
        radius: 0.6,
        distance: 20.0,
        speed: 0.006,
        texture: "uranus.jpg",
        description: "An ice giant that rotates on its side, with rings and 27 moons.",
    },
    BodyDescriptor {
        name: "Neptune",
        radius: 0.6,
        distance: 23.0,
        speed: 0.005,
        texture: "neptune.jpg",
        description: "The windiest planet with the strongest winds in the solar system.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planets_orbit_outside_the_sun_glow_and_each_other() {
        let mut previous_edge = SUN_GLOW_RADIUS;
        for planet in PLANETS.iter() {
            assert!(planet.radius > 0.0 && planet.distance > 0.0);
            assert!(
                planet.distance - planet.radius > previous_edge,
                "{} overlaps its inner neighbour",
                planet.name
            );
            previous_edge = planet.distance + planet.radius;
        }
    }

    #[test]
    fn base_speeds_fit_the_slider_range() {
        for planet in PLANETS.iter() {
            assert!((0.0..=0.1).contains(&planet.speed), "{}", planet.name);
        }
    }

    #[test]
    fn textures_resolve_under_images() {
        assert_eq!(PLANETS[2].texture_path(), "images/earth.jpg");
        assert_eq!(texture_path(SUN_TEXTURE), "images/sun.jpg");
    }
}
