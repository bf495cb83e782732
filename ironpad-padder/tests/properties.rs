use ironpad_padder::{LeftPadder, PadError, Padder, RightPadder};
use proptest::collection::vec;
use proptest::prelude::*;

fn pad_char() -> impl Strategy<Value = char> {
    prop_oneof![Just(' '), Just('0'), Just('\0'), any::<char>()]
}

proptest! {
    #[test]
    fn pad_reaches_exact_width(data in ".{0,16}", extra in 0usize..16, pad in pad_char()) {
        let padder = RightPadder::new(pad);
        let max_length = data.chars().count() + extra;
        let padded = padder.pad(&data, max_length).unwrap();
        prop_assert_eq!(padded.chars().count(), max_length);
        prop_assert!(padded.starts_with(data.as_str()));
    }

    #[test]
    fn pad_rejects_overlong(data in ".{1,16}", short in 1usize..16, pad in pad_char()) {
        let length = data.chars().count();
        let max_length = length.saturating_sub(short);
        prop_assume!(max_length < length);
        let err = RightPadder::new(pad).pad(&data, max_length).unwrap_err();
        prop_assert_eq!(err, PadError::LengthExceeded { length, max_length });
    }

    #[test]
    fn unpad_recovers_data(data in "[A-Z0-9 ]{0,12}[A-Z1-9]", extra in 0usize..8) {
        let padder = RightPadder::SPACE;
        let max_length = data.len() + extra;
        let padded = padder.pad(&data, max_length).unwrap();
        prop_assert_eq!(padder.unpad(&padded), data.as_str());
    }

    #[test]
    fn unpad_all_pad_is_empty(k in 0usize..32, pad in pad_char()) {
        let padded: String = std::iter::repeat_n(pad, k).collect();
        prop_assert_eq!(RightPadder::new(pad).unpad(&padded), "");
        prop_assert_eq!(LeftPadder::new(pad).unpad(&padded), "");
    }

    #[test]
    fn pad_binary_reaches_exact_width(data in vec(any::<u8>(), 0..32), extra in 0usize..16, pad in pad_char()) {
        let padder = RightPadder::new(pad);
        let max_length = data.len() + extra;
        let padded = padder.pad_binary(&data, max_length).unwrap();
        prop_assert_eq!(padded.len(), max_length);
        prop_assert_eq!(&padded[..data.len()], &data[..]);
        prop_assert!(padded[data.len()..].iter().all(|&b| b == pad as u8));
    }

    #[test]
    fn pad_binary_rejects_overlong(data in vec(any::<u8>(), 1..32)) {
        let max_length = data.len() - 1;
        let err = RightPadder::ZERO.pad_binary(&data, max_length).unwrap_err();
        prop_assert_eq!(err.max_length(), max_length);
    }

    #[test]
    fn unpad_binary_recovers_data(mut data in vec(any::<u8>(), 0..32), extra in 0usize..8) {
        let padder = RightPadder::ZERO;
        while data.last() == Some(&b'0') {
            data.pop();
        }
        let padded = padder.pad_binary(&data, data.len() + extra).unwrap();
        prop_assert_eq!(padder.unpad_binary(&padded), &data[..]);
    }

    #[test]
    fn unpad_binary_strips_only_tail(data in vec(any::<u8>(), 0..32)) {
        let unpadded = RightPadder::ZERO.unpad_binary(&data);
        prop_assert!(data.starts_with(unpadded));
        prop_assert!(data[unpadded.len()..].iter().all(|&b| b == b'0'));
        prop_assert!(unpadded.last() != Some(&b'0'));
    }

    #[test]
    fn left_unpad_recovers_data(mut data in vec(any::<u8>(), 0..32), extra in 0usize..8) {
        let padder = LeftPadder::ZERO;
        while data.first() == Some(&b'0') {
            data.remove(0);
        }
        let padded = padder.pad_binary(&data, data.len() + extra).unwrap();
        prop_assert_eq!(padded.len(), data.len() + extra);
        prop_assert_eq!(padder.unpad_binary(&padded), &data[..]);
    }
}

#[test]
fn shared_padder_across_threads() {
    let padder = RightPadder::SPACE;
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let data = "X".repeat(i);
                let padded = padder.pad(&data, 8).unwrap();
                padder.unpad(&padded).len()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), i);
    }
}
