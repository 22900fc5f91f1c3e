use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Accounts required to create the lottery state account.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and fees. It becomes the
    /// lottery admin.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Lottery state account that stores every round.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required to change the ticket cost or the tickets per round.
#[derive(Accounts)]
pub struct UpdateLottery<'info> {
    /// Must match the admin stored in the lottery.
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

#[event]
pub struct LotteryInitialized {
    pub admin: Pubkey,
    pub ticket_cost: u64,
    pub max_tickets: u32,
}

#[event]
pub struct TicketCostChanged {
    pub ticket_cost: u64,
}

#[event]
pub struct MaxTicketsChanged {
    pub max_tickets: u32,
}

/// Creates the lottery with the default ticket cost and tickets per round,
/// administered by the account that pays for it.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let admin = ctx.accounts.payer.key();
    let lottery = &mut ctx.accounts.lottery;
    lottery.set_inner(Lottery::new(admin, ctx.bumps.lottery));

    msg!("Lottery admin: {}", admin);
    emit!(LotteryInitialized {
        admin,
        ticket_cost: lottery.ticket_cost,
        max_tickets: lottery.max_tickets,
    });

    Ok(())
}

/// Sets the ticket price. Only allowed before the first sale of a round.
pub fn process_change_ticket_cost(ctx: Context<UpdateLottery>, new_cost: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.change_ticket_cost(ctx.accounts.admin.key(), new_cost)?;

    msg!("Ticket cost: {}", new_cost);
    emit!(TicketCostChanged {
        ticket_cost: new_cost,
    });

    Ok(())
}

/// Sets the tickets per round. Only allowed before the first sale of a round.
pub fn process_change_max_tickets(ctx: Context<UpdateLottery>, new_max: u32) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.change_max_tickets(ctx.accounts.admin.key(), new_max)?;

    msg!("Max tickets: {}", new_max);
    emit!(MaxTicketsChanged {
        max_tickets: new_max,
    });

    Ok(())
}
