use seminar_core::{Rectangle, RectangleError};

/// Sides with exact binary representations so the arithmetic checks hold
/// without tolerances.
const SIDES: [f64; 6] = [0.5, 1.0, 2.0, 3.0, 4.25, 10.0];

fn pairs() -> impl Iterator<Item = (f64, f64)> {
    SIDES
        .iter()
        .flat_map(|&w| SIDES.iter().map(move |&h| (w, h)))
}

#[test]
fn area_and_perimeter_for_all_sides() {
    for (w, h) in pairs() {
        let r = Rectangle::new(w, h).unwrap();
        assert_eq!(r.area(), w * h, "area of {r:#}");
        assert_eq!(r.perimeter(), 2.0 * (w + h), "perimeter of {r:#}");
    }
}

#[test]
fn square_height_defaults_to_width() {
    for w in SIDES {
        assert_eq!(Rectangle::square(w).unwrap().height(), w);
    }
}

#[test]
fn sum_conserves_perimeter() {
    for (w, h) in pairs() {
        let a = Rectangle::new(w, h).unwrap();
        let b = Rectangle::new(h, 1.0).unwrap();
        let sum = (a + b).unwrap();
        assert_eq!(sum.perimeter(), a.perimeter() + b.perimeter());
        assert_eq!(sum.width(), a.width() + b.width());
    }
}

#[test]
fn difference_is_symmetric() {
    let a = Rectangle::new(10.0, 4.25).unwrap();
    let b = Rectangle::new(2.0, 1.0).unwrap();
    let ab = (a - b).unwrap();
    let ba = (b - a).unwrap();
    assert_eq!((ab.width(), ab.height()), (ba.width(), ba.height()));
    assert_eq!(ab.perimeter(), a.perimeter() - b.perimeter());
}

#[test]
fn equality_follows_area() {
    assert_eq!(Rectangle::new(2.0, 3.0).unwrap(), Rectangle::new(1.0, 6.0).unwrap());

    for (w, h) in pairs() {
        let a = Rectangle::new(w, h).unwrap();
        let b = Rectangle::new(h, w).unwrap();
        assert_eq!(a, b);
        assert!(a <= b && b <= a);
    }
}

#[test]
fn non_positive_sides_are_rejected() {
    for bad in [0.0, -1.0, -0.5] {
        assert!(matches!(
            Rectangle::new(bad, 1.0),
            Err(RectangleError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Rectangle::new(1.0, bad),
            Err(RectangleError::InvalidDimension { .. })
        ));
    }
}
