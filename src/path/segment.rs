use memchr::memchr_iter;

/// Splits `path` on `/`, dropping empty segments so leading, trailing and
/// repeated slashes collapse.
#[inline]
pub fn split_segments(path: &str) -> Vec<Box<str>> {
    let bytes = path.as_bytes();
    let mut segments = Vec::with_capacity(memchr_iter(b'/', bytes).count() + 1);
    let mut start = 0usize;

    for slash in memchr_iter(b'/', bytes) {
        if slash > start {
            segments.push(Box::from(&path[start..slash]));
        }
        start = slash + 1;
    }
    if start < path.len() {
        segments.push(Box::from(&path[start..]));
    }

    segments
}
