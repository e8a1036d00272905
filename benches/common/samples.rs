use nalgebra::Vector2;
use nbezier_sketch::ControlPolygon;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector2::new({(random()-0.5)*i}, {(random()-0.5)*i})")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    ( 0.0,      0.0    ),
    (-0.29734,  0.44984),
    (-0.52560,  0.42885),
    ( 1.42777, -0.02652),
    ( 1.98032, -0.67824),
    ( 0.44863, -0.91328),
    (-2.51139, -0.79100),
    (-3.10479, -0.59318),
    (-1.16022, -2.95591),
    (-1.07946,  0.78888),
];

pub static POLYGONS: Lazy<Polygons> = Lazy::new(Polygons::new);
#[allow(non_snake_case)]
pub struct Polygons {
    pub CUBIC: Vec<ControlPolygon<f64>>,
    pub QUARTIC: Vec<ControlPolygon<f64>>,
    pub HIGHER: Vec<ControlPolygon<f64>>,
}
impl Polygons {
    pub fn new() -> Polygons {
        let polygon = |indices: &[usize]| {
            ControlPolygon::new(indices.iter().map(|&i| Vector2::new(POINTS[i].0, POINTS[i].1)))
                .expect("indices are never empty")
        };
        Polygons {
            CUBIC:   vec![
                polygon(&[0, 1, 2, 3]),
                polygon(&[2, 3, 4, 5]),
                polygon(&[4, 5, 6, 7]),
                polygon(&[6, 7, 8, 9]),
            ],
            QUARTIC: vec![
                polygon(&[0, 1, 2, 3, 4]),
                polygon(&[2, 3, 4, 5, 6]),
                polygon(&[4, 5, 6, 7, 8]),
                polygon(&[6, 7, 8, 9, 0]),
            ],
            HIGHER:  vec![
                polygon(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
                polygon(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=&ControlPolygon<f64>> {
        self.CUBIC.iter()
            .chain(self.QUARTIC.iter())
            .chain(self.HIGHER.iter())
    }
}
