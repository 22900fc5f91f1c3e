use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// A lamport transfer owed by the lottery account, such as a purchase
/// refund or a round's prize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub recipient: Pubkey,
    pub amount: u64,
}

impl Payout {
    /// Moves `amount` lamports out of the program-owned `lottery` account
    /// and into `recipient`. The caller checks that `recipient` is the
    /// account this payout is meant for.
    pub fn apply<'info>(
        &self,
        lottery: &AccountInfo<'info>,
        recipient: &AccountInfo<'info>,
    ) -> Result<()> {
        let lottery_balance = lottery
            .lamports()
            .checked_sub(self.amount)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        let recipient_balance = recipient
            .lamports()
            .checked_add(self.amount)
            .ok_or(LotteryError::ArithmeticOverflow)?;

        **lottery.try_borrow_mut_lamports()? = lottery_balance;
        **recipient.try_borrow_mut_lamports()? = recipient_balance;

        Ok(())
    }
}
