use anchor_lang::error::Error;
use anchor_lang::Result;

use crate::error::LotteryError;

/// Asserts that `result` failed with the `expected` lottery error.
pub fn assert_lottery_error<T: std::fmt::Debug>(result: Result<T>, expected: LotteryError) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
