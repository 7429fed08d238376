use percolation::{DisjointSet, Error};

#[test]
fn starts_as_singletons() {
    let mut set = DisjointSet::new(4).unwrap();
    for x in 0..4 {
        assert_eq!(set.find(x), x);
    }
    assert!(!set.connected(0, 3));
}

#[test]
fn union_connects_transitively() {
    let mut set = DisjointSet::new(6).unwrap();
    set.union(0, 1);
    set.union(2, 3);
    assert!(set.connected(0, 1));
    assert!(!set.connected(1, 2));

    set.union(1, 3);
    assert!(set.connected(0, 2));
    assert!(set.connected(0, 3));
    assert!(!set.connected(0, 4));
}

#[test]
fn union_of_joined_elements_changes_nothing() {
    let mut set = DisjointSet::new(3).unwrap();
    set.union(0, 1);
    set.union(1, 0);
    assert!(set.connected(0, 1));
    assert!(!set.connected(0, 2));
}

#[test]
fn find_is_stable_between_unions() {
    let mut set = DisjointSet::new(5).unwrap();
    set.union(0, 1);
    set.union(1, 2);
    let root = set.find(0);
    assert_eq!(set.find(1), root);
    assert_eq!(set.find(2), root);
    assert_eq!(set.find(0), root);
}

#[test]
fn rejects_empty_universe() {
    assert!(matches!(
        DisjointSet::new(0),
        Err(Error::InvalidArgument(_))
    ));
}
