use rust_decimal_macros::dec;

use crate::types::BidRecord;

pub const CONTRACT_NUMBER: &str = "10-1L8604";
pub const NUMBER_OF_BIDDERS: i32 = 6;

/// The bid results for Caltrans contract 10-1L8604, in rank order.
pub fn caltrans_bids() -> Vec<BidRecord> {
    vec![
        BidRecord::new(CONTRACT_NUMBER, NUMBER_OF_BIDDERS, 1, dec!(2053700.00), "VC1200002736"),
        BidRecord::new(CONTRACT_NUMBER, NUMBER_OF_BIDDERS, 2, dec!(2271255.20), "VC1500004960"),
        BidRecord::new(CONTRACT_NUMBER, NUMBER_OF_BIDDERS, 3, dec!(2287000.00), "VC2000002246"),
        BidRecord::new(CONTRACT_NUMBER, NUMBER_OF_BIDDERS, 4, dec!(2307077.55), "VC1700000908"),
        BidRecord::new(CONTRACT_NUMBER, NUMBER_OF_BIDDERS, 5, dec!(2324503.15), "VC2200003483"),
        BidRecord::new(CONTRACT_NUMBER, NUMBER_OF_BIDDERS, 6, dec!(2575075.00), "VC1200003869"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::validate_batch;

    #[test]
    fn six_bids_on_one_contract() {
        let bids = caltrans_bids();
        assert_eq!(bids.len(), 6);
        assert!(bids.iter().all(|b| b.contract_number == "10-1L8604"));
        assert!(bids.iter().all(|b| b.number_of_bidders == 6));
    }

    #[test]
    fn ranks_are_one_through_six_once_each() {
        let mut ranks: Vec<i32> = caltrans_bids().iter().map(|b| b.bid_rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn amounts_increase_with_rank() {
        let bids = caltrans_bids();
        assert!(bids.windows(2).all(|w| w[0].bid_amount < w[1].bid_amount));
        assert_eq!(bids[0].bid_amount, dec!(2053700.00));
        assert_eq!(bids[5].bid_amount, dec!(2575075.00));
    }

    #[test]
    fn amounts_carry_two_decimal_places() {
        assert!(caltrans_bids().iter().all(|b| b.bid_amount.scale() == 2));
    }

    #[test]
    fn dataset_passes_batch_validation() {
        assert!(validate_batch(&caltrans_bids()).is_ok());
    }
}
