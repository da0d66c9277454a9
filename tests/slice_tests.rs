#![cfg(feature = "slice")]
//! Unit tests for Slice.

use rstest::rstest;
use slicemap::slice;
use slicemap::slice::{BoundKind, Slice, SliceError};

// =============================================================================
// Walkthrough scenario
// =============================================================================

#[rstest]
fn test_walkthrough_scenario() {
    let s: Slice<String> = Slice::make(3, None).unwrap();
    assert_eq!(s.to_vec(), vec![String::new(); 3]);
    assert_eq!((s.len(), s.cap()), (3, 3));

    s.set(0, "a".to_string()).unwrap();
    s.set(1, "b".to_string()).unwrap();
    s.set(2, "c".to_string()).unwrap();
    assert_eq!(s.to_string(), "[a b c]");

    let s = s.append(["d".to_string()]);
    let s = s.append(["e".to_string(), "f".to_string()]);
    assert_eq!(s.to_string(), "[a b c d e f]");

    assert_eq!(s.subrange(2, 5).unwrap().to_string(), "[c d e]");
}

// =============================================================================
// Allocation
// =============================================================================

#[rstest]
fn test_uninitialised_slice_is_nil() {
    let s: Slice<String> = Slice::default();
    assert!(s.is_nil());
    assert_eq!(s.len(), 0);
    assert_eq!(s.to_string(), "[]");
}

#[rstest]
fn test_literal_empty_is_not_nil() {
    let s: Slice<i32> = slice![];
    assert!(!s.is_nil());
    assert!(s.is_empty());
}

#[rstest]
#[case(0, None, 0, 0)]
#[case(3, None, 3, 3)]
#[case(3, Some(3), 3, 3)]
#[case(0, Some(8), 0, 8)]
fn test_make_sizes(
    #[case] length: usize,
    #[case] capacity: Option<usize>,
    #[case] expected_length: usize,
    #[case] expected_capacity: usize,
) {
    let s = Slice::<u8>::make(length, capacity).unwrap();
    assert_eq!(s.len(), expected_length);
    assert_eq!(s.cap(), expected_capacity);
    assert!(!s.is_nil());
}

#[rstest]
fn test_make_rejects_capacity_below_length() {
    let error = Slice::<u8>::make(4, Some(1)).unwrap_err();
    assert!(matches!(error, SliceError::InvalidArgument { length: 4, capacity: 1 }));
    assert!(!error.is_out_of_range());
}

#[rstest]
fn test_make_rejects_oversized_capacity() {
    let error = Slice::<u64>::make(0, Some(usize::MAX / 2)).unwrap_err();
    assert_eq!(
        error,
        SliceError::InvalidArgument {
            length: 0,
            capacity: usize::MAX / 2,
        }
    );
}

#[rstest]
fn test_with_capacity() {
    let s = Slice::<i32>::with_capacity(4).unwrap();
    assert_eq!((s.len(), s.cap()), (0, 4));
    let grown = s.append([1, 2, 3, 4]);
    assert!(grown.shares_storage(&s));
}

// =============================================================================
// Aliasing
// =============================================================================

#[rstest]
fn test_write_through_view_is_visible_in_original() {
    let letters = slice!["a", "b", "c", "d", "e", "f"];
    let view = letters.subrange(2, 5).unwrap();
    view.set(1, "D").unwrap();
    assert_eq!(letters.get(3).unwrap(), "D");
}

#[rstest]
fn test_write_through_original_is_visible_in_view() {
    let letters = slice!["a", "b", "c", "d"];
    let view = letters.slice(1..).unwrap();
    letters.set(1, "B").unwrap();
    assert_eq!(view.get(0).unwrap(), "B");
}

#[rstest]
fn test_clone_is_an_alias() {
    let numbers = slice![1, 2, 3];
    let alias = numbers.clone();
    alias.set(0, 10).unwrap();
    assert_eq!(numbers.get(0).unwrap(), 10);
    assert!(alias.shares_storage(&numbers));
}

#[rstest]
fn test_reallocating_append_detaches_only_returned_view() {
    let numbers = slice![1, 2, 3];
    let view = numbers.subrange(0, 2).unwrap();
    let grown = numbers.append([4]);

    grown.set(0, 100).unwrap();
    assert_eq!(numbers.get(0).unwrap(), 1);
    assert_eq!(view.get(0).unwrap(), 1);

    view.set(1, 20).unwrap();
    assert_eq!(numbers.get(1).unwrap(), 20);
    assert_eq!(grown.get(1).unwrap(), 2);
}

#[rstest]
fn test_in_place_append_through_view_clobbers_sibling() {
    let numbers = slice![1, 2, 3, 4];
    let head = numbers.subrange(0, 1).unwrap();
    let head = head.append([9, 9]);

    assert!(head.shares_storage(&numbers));
    assert_eq!(numbers.to_string(), "[1 9 9 4]");
}

#[rstest]
fn test_reslice_exposes_spare_capacity() {
    let numbers = Slice::<i32>::make(2, Some(4)).unwrap();
    let appended = numbers.append([7]);
    let widened = numbers.reslice(0, 3).unwrap();
    assert_eq!(widened, appended);

    let error = numbers.reslice(0, 5).unwrap_err();
    assert_eq!(
        error,
        SliceError::RangeOutOfRange {
            low: 0,
            high: 5,
            limit: 4,
            bound: BoundKind::Capacity,
        }
    );
}

// =============================================================================
// Copy
// =============================================================================

#[rstest]
fn test_copy_into_same_length() {
    let source = slice!["a", "b", "c", "d", "e", "f"];
    let destination: Slice<&str> = Slice::make(source.len(), None).unwrap();
    assert_eq!(Slice::copy(&destination, &source), 6);
    assert_eq!(destination.to_string(), "[a b c d e f]");
    assert!(!destination.shares_storage(&source));
}

#[rstest]
#[case(0, 3, 0)]
#[case(2, 3, 2)]
#[case(5, 3, 3)]
fn test_copy_count(
    #[case] destination_length: usize,
    #[case] source_length: usize,
    #[case] expected: usize,
) {
    let destination = Slice::<i32>::make(destination_length, None).unwrap();
    let source: Slice<i32> = (1..=i32::try_from(source_length).unwrap()).collect();
    assert_eq!(Slice::copy(&destination, &source), expected);
    assert_eq!(destination.len(), destination_length);
}

// =============================================================================
// Bounds
// =============================================================================

#[rstest]
fn test_failed_set_leaves_contents_unchanged() {
    let numbers = slice![1, 2, 3];
    let error = numbers.set(3, 4).unwrap_err();
    assert_eq!(error.to_string(), "index out of range [3] with length 3");
    assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_subrange_low_above_high() {
    let numbers = slice![1, 2, 3];
    let error = numbers.subrange(2, 1).unwrap_err();
    assert!(error.is_out_of_range());
    assert_eq!(error.to_string(), "slice bounds out of range [2:1] with length 3");
}

#[rstest]
fn test_subrange_of_nil() {
    let nil: Slice<i32> = Slice::nil();
    assert!(nil.subrange(0, 0).unwrap().is_nil());
    assert!(nil.subrange(0, 1).is_err());
}

// =============================================================================
// Equality and rendering
// =============================================================================

#[rstest]
fn test_equal_literals() {
    let t = slice!["g", "h", "i"];
    let t2 = slice!["g", "h", "i"];
    assert!(Slice::equal(&t, &t2));
    assert_eq!(t.to_string(), "[g h i]");
}

#[rstest]
fn test_equal_compares_visible_elements_only() {
    let long = slice![1, 2, 3, 9];
    let short = slice![1, 2, 3];
    assert_ne!(long, short);
    assert_eq!(long.subrange(0, 3).unwrap(), short);
}

#[rstest]
fn test_nested_build_by_index() {
    let two_d: Slice<Slice<usize>> = Slice::make(3, None).unwrap();
    for i in 0..3 {
        let row = Slice::make(i + 1, None).unwrap();
        for j in 0..=i {
            row.set(j, i + j).unwrap();
        }
        two_d.set(i, row).unwrap();
    }
    assert_eq!(two_d.to_string(), "[[0] [1 2] [2 3 4]]");
    assert_eq!(two_d, Slice::jagged([1, 2, 3], |row, column| row + column));
}

#[rstest]
fn test_empty_strings_render_as_spaces() {
    let blanks: Slice<String> = Slice::make(3, None).unwrap();
    assert_eq!(format!("emp: {blanks}"), "emp: [  ]");
}
