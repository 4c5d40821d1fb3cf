/// Asserts the applied position of an item.
#[macro_export]
macro_rules! assert_position {
    ($harness:expr, $id:expr, ($x:expr, $y:expr)) => {
        let actual = $harness.position($id);
        assert_eq!(
            (actual.x, actual.y),
            ($x as f32, $y as f32),
            "item {} is at ({}, {})",
            $id,
            actual.x,
            actual.y
        );
    };
}

/// Asserts the filtered set in display order.
#[macro_export]
macro_rules! assert_filtered {
    ($harness:expr, [$($id:expr),* $(,)?]) => {
        assert_eq!($harness.filtered_ids(), vec![$($id as u64),*]);
    };
}
