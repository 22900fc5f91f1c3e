use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod payout;
pub mod state;

#[cfg(test)]
mod test_utils;

declare_id!("AxqaGBoTxeChwRLxD2PrSNR3oV5a822GtNzatZPBt6pm");

#[program]
pub mod ticket_lottery {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn buy_tickets(ctx: Context<BuyTickets>, paid_amount: u64, count: u32) -> Result<()> {
        process_buy_tickets(ctx, paid_amount, count)
    }

    pub fn close_round(ctx: Context<CloseRound>, random_number: u64) -> Result<()> {
        process_close_round(ctx, random_number)
    }

    pub fn change_ticket_cost(ctx: Context<UpdateLottery>, new_cost: u64) -> Result<()> {
        process_change_ticket_cost(ctx, new_cost)
    }

    pub fn change_max_tickets(ctx: Context<UpdateLottery>, new_max: u32) -> Result<()> {
        process_change_max_tickets(ctx, new_max)
    }

    pub fn fallback<'info>(
        _program_id: &Pubkey,
        _accounts: &'info [AccountInfo<'info>],
        data: &[u8],
    ) -> Result<()> {
        process_reject(data)
    }
}
