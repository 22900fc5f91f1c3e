use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::state::Lottery;

/// Accounts required to close a sold out round.
///
/// The admin supplies the random number and must pass the account that
/// bought the winning ticket, since the prize can only be sent to an
/// account listed in the instruction.
#[derive(Accounts)]
pub struct CloseRound<'info> {
    /// Must match the admin stored in the lottery.
    pub admin: Signer<'info>,

    /// The main lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Receives the pot.
    /// CHECK: Compared against the buyer of the winning ticket in the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

#[event]
pub struct RoundClosed {
    pub winner: Pubkey,
    pub winning_ticket: u32,
    pub random_number: u64,
    pub prize: u64,
}

/// Draws the winner and pays them everything the lottery account holds
/// above its rent-exempt reserve, including lamports that reached the
/// account through plain System Program transfers.
///
/// # Arguments
/// * `ctx` - Context containing CloseRound accounts
/// * `random_number` - Number the winning ticket is drawn from
pub fn process_close_round(ctx: Context<CloseRound>, random_number: u64) -> Result<()> {
    let lottery_info = ctx.accounts.lottery.to_account_info();
    let reserve = Rent::get()?.minimum_balance(lottery_info.data_len());
    let pooled_balance = lottery_info
        .lamports()
        .checked_sub(reserve)
        .ok_or(LotteryError::ArithmeticOverflow)?;

    let (winning_ticket, payout) = ctx.accounts.lottery.close_round(
        ctx.accounts.admin.key(),
        random_number,
        pooled_balance,
    )?;

    require_keys_eq!(
        ctx.accounts.winner.key(),
        payout.recipient,
        LotteryError::WinnerMismatch
    );
    payout.apply(&lottery_info, &ctx.accounts.winner.to_account_info())?;

    msg!("Random number: {}", random_number);
    msg!("Winning ticket: {}", winning_ticket);
    msg!("Winner: {} ({} lamports)", payout.recipient, payout.amount);

    emit!(RoundClosed {
        winner: payout.recipient,
        winning_ticket,
        random_number,
        prize: payout.amount,
    });

    Ok(())
}
