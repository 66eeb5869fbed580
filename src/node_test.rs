use super::*;

#[test]
fn test_node_new() {
    let node = Node::new(10_u32, NIL, Color::Red);
    assert_eq!(node.value, 10);
    assert_eq!(node.parent, NIL);
    assert_eq!(node.child(Side::Left), NIL);
    assert_eq!(node.child(Side::Right), NIL);
    assert!(!node.is_black());
}

#[test]
fn test_node_links() {
    let mut node = Node::new("a", 3, Color::Black);
    node.set_child(Side::Left, 1);
    node.set_child(Side::Right, 2);
    assert_eq!((node.left, node.right), (1, 2));
    assert_eq!(node.child(Side::Left.flip()), 2);

    node.set_red();
    assert_eq!(node.color, Color::Red);
    node.set_black();
    assert!(node.is_black());
}
