use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::LotteryError;
use crate::payout::Payout;

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Lottery {
    /// The only account allowed to close rounds and change parameters.
    pub admin: Pubkey,

    /// The price (in lamports) required to purchase a single ticket.
    pub ticket_cost: u64,

    /// Number of tickets sold per round. A round can only be closed
    /// once all of them are gone.
    pub max_tickets: u32,

    /// Tickets still for sale in the current round.
    pub tickets_available: u32,

    /// Tickets sold in the current round.
    pub tickets_sold: u32,

    /// Lamports collected from ticket sales in the current round.
    /// Refunded overpayments never enter the pot.
    pub pot: u64,

    /// Buyer of every ticket sold this round, indexed by ticket number.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,
}

impl Lottery {
    pub fn new(admin: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            ticket_cost: DEFAULT_TICKET_COST,
            max_tickets: DEFAULT_MAX_TICKETS,
            tickets_available: DEFAULT_MAX_TICKETS,
            tickets_sold: 0,
            pot: 0,
            players: Vec::new(),
            bump,
        }
    }

    /// Sells `count` tickets to `buyer`, who attached `paid_amount` lamports.
    ///
    /// Either every ticket is sold or none is: asking for more tickets than
    /// are left fails instead of filling up the round. Returns the refund
    /// owed to the buyer when they paid more than the tickets cost.
    pub fn buy_tickets(
        &mut self,
        buyer: Pubkey,
        paid_amount: u64,
        count: u32,
    ) -> Result<Option<Payout>> {
        require!(self.tickets_available > 0, LotteryError::CapacityExceeded);
        require!(count > 0, LotteryError::InvalidTicketCount);
        require_gte!(
            self.tickets_available,
            count,
            LotteryError::CapacityExceeded
        );

        let cost = self
            .ticket_cost
            .checked_mul(u64::from(count))
            .ok_or(LotteryError::ArithmeticOverflow)?;
        require_gte!(paid_amount, cost, LotteryError::InsufficientPayment);
        let pot = self
            .pot
            .checked_add(cost)
            .ok_or(LotteryError::ArithmeticOverflow)?;

        self.players
            .extend(std::iter::repeat(buyer).take(count as usize));
        self.tickets_available -= count;
        self.tickets_sold += count;
        self.pot = pot;

        let surplus = paid_amount - cost;
        Ok((surplus > 0).then_some(Payout {
            recipient: buyer,
            amount: surplus,
        }))
    }

    /// Draws the winner of a sold out round and starts the next one.
    ///
    /// The winning ticket is `random_number % max_tickets`. Nothing here
    /// checks where `random_number` came from. `pooled_balance` is every
    /// lamport the lottery account holds above its rent-exempt reserve: the
    /// pot plus anything transferred to the account directly. All of it goes
    /// to the winner. Returns the winning ticket number and that payout.
    pub fn close_round(
        &mut self,
        caller: Pubkey,
        random_number: u64,
        pooled_balance: u64,
    ) -> Result<(u32, Payout)> {
        require_keys_eq!(caller, self.admin, LotteryError::Unauthorized);
        require!(self.tickets_available == 0, LotteryError::RoundNotComplete);

        let winning_ticket = random_number
            .checked_rem(u64::from(self.max_tickets))
            .ok_or(LotteryError::InvalidMaxTickets)?;
        // A sold out round has a buyer at every index below max_tickets.
        let winner = self
            .players
            .get(winning_ticket as usize)
            .copied()
            .ok_or(LotteryError::RoundNotComplete)?;

        let payout = Payout {
            recipient: winner,
            amount: pooled_balance,
        };

        self.players.clear();
        self.tickets_available = self.max_tickets;
        self.tickets_sold = 0;
        self.pot = 0;

        Ok((winning_ticket as u32, payout))
    }

    /// Sets the price of one ticket for the next round.
    pub fn change_ticket_cost(&mut self, caller: Pubkey, new_cost: u64) -> Result<()> {
        self.check_reconfigurable(caller)?;
        require!(new_cost > 0, LotteryError::InvalidTicketCost);

        self.ticket_cost = new_cost;
        Ok(())
    }

    /// Sets the number of tickets per round and puts all of them on sale.
    pub fn change_max_tickets(&mut self, caller: Pubkey, new_max: u32) -> Result<()> {
        self.check_reconfigurable(caller)?;
        require!(
            (1..=MAX_TICKET_CAPACITY).contains(&new_max),
            LotteryError::InvalidMaxTickets
        );

        self.max_tickets = new_max;
        self.tickets_available = new_max;
        Ok(())
    }

    /// Parameters belong to the admin and are frozen once a round has sales.
    fn check_reconfigurable(&self, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.admin, LotteryError::Unauthorized);
        require!(self.tickets_sold == 0, LotteryError::RoundInProgress);
        Ok(())
    }
}
