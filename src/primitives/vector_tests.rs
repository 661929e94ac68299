pub(crate) use super::*;

#[test]
fn test_from_slice() {
    let v = Vector::from_slice(&[1, 2, 3]);
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
    assert_eq!(v[1], 2);
}

#[test]
fn test_empty() {
    let v = Vector::<f64>::from_vec(Vec::new());
    assert!(v.is_empty());
    assert_eq!(v.get(0), None);
}

#[test]
fn test_zeros() {
    let v = Vector::<u8>::zeros(4);
    assert_eq!(v.as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn test_get() {
    let v = Vector::from_slice(&[1.5_f32, -2.0]);
    assert_eq!(v.get(1), Some(-2.0));
    assert_eq!(v.get(2), None);
}

#[test]
fn test_sorted_keeps_duplicates() {
    let v = Vector::from_slice(&[3, 1, 3, 2, 1]);
    assert_eq!(v.sorted().as_slice(), &[1, 1, 2, 3, 3]);
    // original untouched
    assert_eq!(v.as_slice(), &[3, 1, 3, 2, 1]);
}

#[test]
fn test_sorted_with_nan_puts_nan_last() {
    let v = Vector::from_slice(&[2.0_f64, f64::NAN, 1.0]);
    let s = v.sorted();
    assert_eq!(&s.as_slice()[..2], &[1.0, 2.0]);
    assert!(s[2].is_nan());
}

#[test]
fn test_sorted_long_vector_with_scattered_nan() {
    // long enough to leave the small-sort path
    let data: Vec<f64> = (0..240)
        .map(|i| if i % 16 == 5 { f64::NAN } else { f64::from((i * 37) % 101) - 50.0 })
        .collect();
    let nan_count = data.iter().filter(|x| x.is_nan()).count();
    let s = Vector::from_vec(data).sorted();

    let (finite, nans) = s.as_slice().split_at(s.len() - nan_count);
    assert!(nans.iter().all(|x| x.is_nan()));
    assert!(finite.iter().all(|x| !x.is_nan()));
    assert!(finite.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_collect_and_into_vec() {
    let v: Vector<i32> = (0..4).map(|x| x * x).collect();
    assert_eq!(v.into_vec(), vec![0, 1, 4, 9]);
}

#[test]
fn test_iter_by_ref() {
    let v = Vector::from_slice(&[1, 2, 3]);
    let total: i32 = (&v).into_iter().sum();
    assert_eq!(total, 6);
    assert_eq!(v.iter().count(), 3);
}
