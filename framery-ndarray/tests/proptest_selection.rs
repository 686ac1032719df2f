//! Property tests for label-based view construction
//!
//! Random shapes and random per-axis selections over an ndarray-backed labeled array whose element at a position
//! is its row-major offset.

use std::collections::BTreeSet;

use framery_core::prelude::*;
use framery_ndarray::{NdLabeledArray, NdLabeledArrayExt};
use ndarray::{Array, IxDyn};
use proptest::prelude::*;

const NAMES: [&str; 4] = ["a", "b", "c", "d"];

/// One axis' selection, by position; labels are `10 * position`.
#[derive(Debug, Clone)]
enum Pick {
    Squeeze(usize),
    Range(usize, usize),
    Keep(Vec<usize>),
    Drop(Vec<usize>),
    All,
    Absent,
}

impl Pick {
    fn slice(&self) -> Option<AxisSlice<usize>> {
        let label = |p: &usize| p * 10;
        match self {
            Pick::Squeeze(p) => Some(AxisSlice::squeeze(label(p))),
            Pick::Range(a, b) => Some(AxisSlice::range(label(a), label(b))),
            Pick::Keep(ps) => Some(AxisSlice::keep(ps.iter().map(label))),
            Pick::Drop(ps) => Some(AxisSlice::drop(ps.iter().map(label))),
            Pick::All => Some(AxisSlice::all()),
            Pick::Absent => None,
        }
    }

    fn expected_size(&self, len: usize) -> Option<usize> {
        match self {
            Pick::Squeeze(_) => None,
            Pick::Range(a, b) => Some(if b >= a { b - a + 1 } else { 0 }),
            Pick::Keep(ps) => Some(ps.iter().collect::<BTreeSet<_>>().len()),
            Pick::Drop(ps) => Some(len - ps.iter().collect::<BTreeSet<_>>().len()),
            Pick::All | Pick::Absent => Some(len),
        }
    }
}

fn arb_pick(len: usize) -> BoxedStrategy<Pick> {
    prop_oneof![
        (0..len).prop_map(Pick::Squeeze),
        (0..len, 0..len).prop_map(|(a, b)| Pick::Range(a, b)),
        proptest::collection::vec(0..len, 0..=len).prop_map(Pick::Keep),
        proptest::collection::vec(0..len, 0..len).prop_map(Pick::Drop),
        Just(Pick::All),
        Just(Pick::Absent),
    ]
    .boxed()
}

fn arb_case() -> impl Strategy<Value = (Vec<usize>, Vec<Pick>)> {
    proptest::collection::vec(1usize..5, 1..=NAMES.len()).prop_flat_map(|shape| {
        let picks: Vec<_> = shape.iter().map(|&len| arb_pick(len)).collect();
        (Just(shape), picks)
    })
}

fn source(shape: &[usize]) -> NdLabeledArray<usize, &'static str, usize> {
    let len = shape.iter().product();
    let data = Array::from_shape_vec(IxDyn(shape), (0..len).collect()).unwrap();
    let axes = shape
        .iter()
        .zip(NAMES)
        .map(|(&n, name)| (name, Axis::from_labels((0..n).map(|p| p * 10)).unwrap()));
    NdLabeledArray::from_array(data, axes).unwrap()
}

fn selector(picks: &[Pick]) -> Selector<&'static str, usize> {
    picks
        .iter()
        .zip(NAMES)
        .filter_map(|(pick, name)| pick.slice().map(|s| (name, s)))
        .collect()
}

/// Every index of a box with the given side lengths, in row-major order.
fn index_space(sizes: &[usize]) -> Vec<Vec<usize>> {
    sizes.iter().fold(vec![vec![]], |acc, &n| {
        acc.into_iter()
            .flat_map(|prefix| {
                (0..n).map(move |i| {
                    let mut next = prefix.clone();
                    next.push(i);
                    next
                })
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// View rank is source rank minus squeezed axes; size follows the per-axis selections
    #[test]
    fn view_shape((shape, picks) in arb_case()) {
        let src = source(&shape);
        let view = src.view(&selector(&picks)).unwrap();

        let squeezed = picks.iter().filter(|p| matches!(p, Pick::Squeeze(_))).count();
        prop_assert_eq!(view.dimension(), shape.len() - squeezed);

        let expected: usize = picks
            .iter()
            .zip(&shape)
            .filter_map(|(pick, &len)| pick.expected_size(len))
            .product();
        prop_assert_eq!(view.size(), expected);
    }

    /// No axis is both squeezed and presented
    #[test]
    fn squeeze_disjoint_from_coordinate((shape, picks) in arb_case()) {
        let src = source(&shape);
        let view = src.view(&selector(&picks)).unwrap();

        for name in view.squeezed().keys() {
            prop_assert!(!view.coordinates().contains(name));
        }
        prop_assert_eq!(view.squeezed().len() + view.coordinates().len(), shape.len());
    }

    /// Presented axes keep the source's dimension order
    #[test]
    fn view_preserves_order((shape, picks) in arb_case()) {
        let src = source(&shape);
        let view = src.view(&selector(&picks)).unwrap();

        let expected: Vec<&str> = picks
            .iter()
            .zip(NAMES)
            .filter(|(pick, _)| !matches!(pick, Pick::Squeeze(_)))
            .map(|(_, name)| name)
            .collect();
        prop_assert_eq!(view.dimension_labels(), expected.as_slice());
    }

    /// Every element seen through a view is the source element at the same labels
    #[test]
    fn view_elements_match_source((shape, picks) in arb_case()) {
        let src = source(&shape);
        let view = src.view(&selector(&picks)).unwrap();

        let axes: Vec<(&str, &Axis<usize>)> = view
            .dimension_labels()
            .iter()
            .map(|name| (*name, view.coordinates().get(name).unwrap()))
            .collect();
        let sizes: Vec<usize> = axes.iter().map(|(_, axis)| axis.size()).collect();

        for ordinals in index_space(&sizes) {
            let mut at_view = Selector::new();
            let mut at_source = Selector::new();
            for ((name, axis), &o) in axes.iter().zip(&ordinals) {
                let label = axis.labels()[o];
                at_view.insert(*name, AxisSlice::squeeze(label));
                at_source.insert(*name, AxisSlice::squeeze(label));
            }
            for (pick, name) in picks.iter().zip(NAMES) {
                if let Pick::Squeeze(p) = pick {
                    at_source.insert(name, AxisSlice::squeeze(p * 10));
                }
            }
            prop_assert_eq!(view.select(&at_view).unwrap(), src.select(&at_source).unwrap());
        }
    }
}

#[test]
fn index_space_test() {
    assert_eq!(
        index_space(&[2, 2]),
        vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
    );
    assert_eq!(index_space(&[3, 0]), Vec::<Vec<usize>>::new());
    assert_eq!(index_space(&[]), vec![Vec::<usize>::new()]);
}
