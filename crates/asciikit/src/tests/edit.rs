use crate::edit::{
    insert, pad_end, pad_start, remove, remove_ci, remove_substring, remove_substring_by_range,
    repeat, replace, replace_ci, replace_substring, replace_substring_by_range, strip_end,
    strip_end_ci, strip_start, strip_start_ci,
};

#[test]
fn padding_cycles_and_truncates() {
    assert_eq!(pad_start(b"ab", b"xy", 5), b"xyxab");
    assert_eq!(pad_end(b"ab", b"xy", 5), b"abxyx");
    assert_eq!(pad_start(b"ab", b"-", 4), b"--ab");
    assert_eq!(pad_start(b"ab", b"xy", 2), b"ab");
    assert_eq!(pad_end(b"", b".", 3), b"...");
    // Empty padding cannot grow anything.
    assert_eq!(pad_start(b"ab", b"", 5), b"ab");
}

#[test]
fn stripping_peels_stacked_affixes() {
    assert_eq!(strip_start(b"www.example.com", "www."), b"example.com");
    assert_eq!(strip_start(b"foofoobar", "foo"), b"bar");
    assert_eq!(strip_start(b"aabbcc", &[b"a".as_slice(), b"b".as_slice()]), b"cc");
    assert_eq!(strip_start(b"bar", "foo"), b"bar");
    assert_eq!(strip_start(b"abc", ""), b"abc");

    assert_eq!(strip_end(b"report.txt", ".txt"), b"report");
    assert_eq!(strip_end(b"aabbcc", &[b"c".as_slice(), b"b".as_slice()]), b"aa");

    assert_eq!(strip_start_ci(b"WWW.example.com", "www."), b"example.com");
    assert_eq!(strip_end_ci(b"REPORT.TXT", ".txt"), b"REPORT");
}

#[test]
fn insertion() {
    assert_eq!(insert(b"hello", 0, b">> "), b">> hello");
    assert_eq!(insert(b"held", 3, b"l wor"), b"hell word");
    assert_eq!(insert(b"ab", 2, b"c"), b"abc");
    assert_eq!(insert(b"ab", 1, b""), b"ab");
}

#[test]
fn positional_replacement() {
    assert_eq!(replace_substring(b"hello", 1, 3, b"ipp"), b"hippo");
    assert_eq!(replace_substring(b"hello", 0, 5, b"bye"), b"bye");
    assert_eq!(replace_substring_by_range(b"hello", 1, 4, b"ipp"), b"hippo");
    assert_eq!(remove_substring(b"hello", 1, 3), b"ho");
    assert_eq!(remove_substring_by_range(b"hello", 0, 4), b"o");
}

#[test]
fn occurrence_replacement_reports_counts() {
    assert_eq!(replace(b"one two two", b"two", b"2"), (b"one 2 2".to_vec(), 2));
    assert_eq!(replace(b"aaaa", b"aa", b"b"), (b"bb".to_vec(), 2));
    assert_eq!(replace(b"abc", b"x", b"y"), (b"abc".to_vec(), 0));
    assert_eq!(replace(b"abc", b"", b"y"), (b"abc".to_vec(), 0));
    assert_eq!(replace_ci(b"Ha HA ha", b"ha", b"ho"), (b"ho ho ho".to_vec(), 3));

    assert_eq!(remove(b"a-b-c", b"-"), (b"abc".to_vec(), 2));
    assert_eq!(remove_ci(b"aAbA", b"a"), (b"b".to_vec(), 3));
}

#[test]
fn repetition() {
    assert_eq!(repeat(b"ab", 3), b"ababab");
    assert_eq!(repeat(b"x", 1), b"x");
    assert_eq!(repeat(b"", 0), b"");
}
