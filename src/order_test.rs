use super::*;

#[test]
fn test_order_natural() {
    let order: Order<i32> = Order::natural();
    assert_eq!(order.to_strategy(), Strategy::Natural);
    assert_eq!(order.compare(&1, &2), Some(Ordering::Less));
    assert_eq!(order.compare(&2, &2), Some(Ordering::Equal));
    assert_eq!(order.compare(&3, &2), Some(Ordering::Greater));

    let order: Order<f64> = Order::natural();
    assert_eq!(order.compare(&1.0, &f64::NAN), None);
    assert_eq!(order.compare(&f64::NAN, &f64::NAN), None);
}

#[test]
fn test_order_total() {
    let order: Order<u8> = Order::total(|a: &u8, b: &u8| b.cmp(a));
    assert_eq!(order.to_strategy(), Strategy::Comparator);
    assert_eq!(order.compare(&1, &2), Some(Ordering::Greater));
    assert_eq!(order.compare(&9, &9), Some(Ordering::Equal));
}

#[test]
fn test_order_partial() {
    // only even numbers are comparable.
    let order: Order<u8> = Order::partial(|a: &u8, b: &u8| match (a % 2, b % 2) {
        (0, 0) => Some(a.cmp(b)),
        _ => None,
    });
    assert_eq!(order.to_strategy(), Strategy::Comparator);
    assert_eq!(order.compare(&2, &4), Some(Ordering::Less));
    assert_eq!(order.compare(&2, &3), None);
    assert_eq!(format!("{}", order.to_strategy()), "comparator");
}
