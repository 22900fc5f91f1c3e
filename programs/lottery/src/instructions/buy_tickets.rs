use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Accounts required to buy lottery tickets.
#[derive(Accounts)]
pub struct BuyTickets<'info> {
    /// The account paying for, and holding, the tickets.
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Lottery state account, which also holds the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program for the payment transfer.
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TicketsPurchased {
    pub buyer: Pubkey,
    pub first_ticket: u32,
    pub count: u32,
    pub refund: u64,
}

/// Buys `count` tickets for the caller.
///
/// Steps performed:
/// 1. Record the tickets, failing if they are not all available or
///    `paid_amount` does not cover them.
/// 2. Transfer `paid_amount` lamports from the buyer to the lottery.
/// 3. Send any overpayment back to the buyer.
///
/// # Arguments
/// * `ctx` - Context containing BuyTickets accounts
/// * `paid_amount` - Lamports the buyer attaches to the purchase
/// * `count` - Number of tickets to buy
pub fn process_buy_tickets(ctx: Context<BuyTickets>, paid_amount: u64, count: u32) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let first_ticket = ctx.accounts.lottery.tickets_sold;
    let refund = ctx
        .accounts
        .lottery
        .buy_tickets(buyer, paid_amount, count)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        paid_amount,
    )?;

    if let Some(payout) = refund {
        msg!("Refunding {} lamports", payout.amount);
        payout.apply(
            &ctx.accounts.lottery.to_account_info(),
            &ctx.accounts.buyer.to_account_info(),
        )?;
    }

    msg!("Tickets {}..{} sold to {}", first_ticket, first_ticket + count, buyer);
    msg!("Tickets available: {}", ctx.accounts.lottery.tickets_available);

    emit!(TicketsPurchased {
        buyer,
        first_ticket,
        count,
        refund: refund.map_or(0, |payout| payout.amount),
    });

    Ok(())
}
