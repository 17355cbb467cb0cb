//! Small fixed-width vectors used as curve payloads

/// Componentwise `+` and scalar `*` shared by every vector width
macro_rules! vector_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl std::ops::Add for $name {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, scalar: f32) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }
    };
}

pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
