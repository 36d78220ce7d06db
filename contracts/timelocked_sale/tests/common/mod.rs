#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token, Address, Env, Symbol, TryFromVal, Val, Vec,
};
use timelocked_sale::{
    ContributionLimits, DeliveryMode, FundsConfig, LockTerms, SaleAssets, SaleWindow,
    TimelockedSaleContract, TimelockedSaleContractClient,
};

pub const ETHER: i128 = 1_000_000_000_000_000_000;
pub const MINUTE: u64 = 60;
pub const WEEK: u64 = 7 * 24 * 60 * MINUTE;
pub const GENESIS: u64 = 1_000_000;

pub const RATE: i128 = 500;
pub const CAP: i128 = 70 * ETHER;
pub const MIN_CONTRIBUTION: i128 = 2 * ETHER / 1_000;
pub const MAX_CONTRIBUTION: i128 = 50 * ETHER;
pub const CLIFF: u64 = 4 * WEEK;
pub const DURATION: u64 = 12 * WEEK;
pub const TEAM_BPS: u32 = 2_000;
pub const PARTNERS_BPS: u32 = 1_000;

pub fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, token::Client<'a>, token::StellarAssetClient<'a>) {
    let contract_address = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    (
        contract_address.clone(),
        token::Client::new(e, &contract_address),
        token::StellarAssetClient::new(e, &contract_address),
    )
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}

pub fn terms(revocable: bool) -> LockTerms {
    LockTerms {
        cliff_duration: CLIFF,
        duration: DURATION,
        revocable,
    }
}

pub struct SaleFixture<'a> {
    pub env: Env,
    pub sale: TimelockedSaleContractClient<'a>,
    pub sale_id: Address,
    pub owner: Address,
    pub wallet: Address,
    pub token_wallet: Address,
    pub team: Address,
    pub partners: Address,
    pub token_id: Address,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub payment_id: Address,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
    pub opening_time: u64,
    pub closing_time: u64,
}

impl<'a> SaleFixture<'a> {
    pub fn new(delivery: DeliveryMode) -> Self {
        Self::with_terms(delivery, terms(true), terms(true))
    }

    pub fn with_terms(delivery: DeliveryMode, investor: LockTerms, funds: LockTerms) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        set_time(&env, GENESIS);

        let owner = Address::generate(&env);
        let wallet = Address::generate(&env);
        let token_wallet = Address::generate(&env);
        let team = Address::generate(&env);
        let partners = Address::generate(&env);

        let (token_id, token, token_admin) = create_token_contract(&env, &owner);
        let (payment_id, payment, payment_admin) = create_token_contract(&env, &owner);

        let sale_id = env.register_contract(None, TimelockedSaleContract);
        let sale = TimelockedSaleContractClient::new(&env, &sale_id);

        let opening_time = GENESIS + WEEK;
        let closing_time = opening_time + WEEK;

        sale.initialize(
            &owner,
            &SaleAssets {
                token: token_id.clone(),
                payment_token: payment_id.clone(),
                wallet: wallet.clone(),
                token_wallet: token_wallet.clone(),
            },
            &SaleWindow {
                opening_time,
                closing_time,
            },
            &ContributionLimits {
                min_contribution: MIN_CONTRIBUTION,
                max_contribution: MAX_CONTRIBUTION,
            },
            &RATE,
            &CAP,
            &delivery,
            &investor,
            &FundsConfig {
                team: team.clone(),
                partners: partners.clone(),
                team_bps: TEAM_BPS,
                partners_bps: PARTNERS_BPS,
                team_terms: funds.clone(),
                partners_terms: funds,
            },
        );

        // The token vault holds the sale supply and lets the sale pull from it.
        let supply = 1_000_000_000 * ETHER;
        token_admin.mint(&token_wallet, &supply);
        token.approve(&token_wallet, &sale_id, &supply, &100_000);

        SaleFixture {
            env,
            sale,
            sale_id,
            owner,
            wallet,
            token_wallet,
            team,
            partners,
            token_id,
            token,
            token_admin,
            payment_id,
            payment,
            payment_admin,
            opening_time,
            closing_time,
        }
    }

    /// A fresh investor holding 100 ether of the payment asset.
    pub fn investor(&self) -> Address {
        let investor = Address::generate(&self.env);
        self.payment_admin.mint(&investor, &(100 * ETHER));
        investor
    }

    pub fn open(&self) {
        set_time(&self.env, self.opening_time);
    }

    pub fn close(&self) {
        set_time(&self.env, self.closing_time + 1);
    }

    /// Topics and data of the sale's events named `name`, oldest first.
    /// Events from the asset contracts are skipped.
    pub fn sale_events(&self, name: Symbol) -> std::vec::Vec<(Vec<Val>, Val)> {
        self.env
            .events()
            .all()
            .iter()
            .filter(|event| event.0 == self.sale_id)
            .filter(|event| match event.1.get(0) {
                Some(topic) => Symbol::try_from_val(&self.env, &topic) == Ok(name.clone()),
                None => false,
            })
            .map(|event| (event.1, event.2))
            .collect()
    }

    /// Data of the most recent sale event named `name`.
    pub fn last_event_data<D: TryFromVal<Env, Val>>(&self, name: Symbol) -> D {
        let (_, data) = self
            .sale_events(name)
            .pop()
            .expect("no matching sale event");
        match D::try_from_val(&self.env, &data) {
            Ok(decoded) => decoded,
            Err(_) => panic!("unexpected event data"),
        }
    }
}
