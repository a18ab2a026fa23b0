/// Concatenates `arrays` into a fresh vector, keeping argument order and
/// the order of elements within each input.
pub fn concatenate<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    let total = arrays.iter().map(|arr| arr.len()).sum();
    let mut out = Vec::with_capacity(total);
    for arr in arrays {
        out.extend_from_slice(arr);
    }
    out
}

/// Variadic front-end for [`concatenate`].
///
/// Accepts anything that slices with `[..]` (arrays, vectors, slices).
///
/// ```
/// use snippets::concatenate;
///
/// let joined = concatenate![[1, 2], vec![3], []];
/// assert_eq!(joined, vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! concatenate {
    () => {
        $crate::concat::concatenate(&[])
    };
    ($($arr:expr),+ $(,)?) => {
        $crate::concat::concatenate(&[$(&$arr[..]),+])
    };
}
