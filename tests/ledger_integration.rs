//! End-to-end ledger tests against a real SQLite database.
//!
//! These cover what the in-memory mocks cannot: the diesel transaction
//! path, the commit-time recheck, and rollback leaving rows untouched.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tempfile::TempDir;

use papertrade_core::accounts::{
    AccountRepository, AccountRepositoryTrait, AccountService, AccountServiceTrait, NewAccount,
};
use papertrade_core::db::{self, DbPool};
use papertrade_core::holdings::{HoldingRepository, HoldingRepositoryTrait};
use papertrade_core::market_data::{providers::ManualProvider, MarketDataService};
use papertrade_core::portfolio::{ValuationService, ValuationServiceTrait};
use papertrade_core::trading::{
    TradeError, TradeOrder, TradeRepository, TradeRepositoryTrait, TradeService, TradeServiceTrait,
};
use papertrade_core::transactions::{
    TradeAction, TransactionRepository, TransactionRepositoryTrait, TransactionService,
    TransactionServiceTrait,
};

struct TestApp {
    _tmp: TempDir,
    accounts: Arc<AccountRepository>,
    holdings: Arc<HoldingRepository>,
    transactions: Arc<TransactionRepository>,
    ledger: Arc<TradeRepository<Arc<DbPool>>>,
    provider: Arc<ManualProvider>,
    trade_service: TradeService,
    valuation_service: ValuationService,
    transaction_service: TransactionService,
    account_service: AccountService,
}

fn setup() -> TestApp {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("ledger.db");
    let db_path = db_path.to_str().unwrap();

    db::init(db_path).unwrap();
    let pool = db::create_pool(db_path).unwrap();
    db::run_migrations(&pool).unwrap();

    let accounts = Arc::new(AccountRepository::new(pool.clone()));
    let holdings = Arc::new(HoldingRepository::new(pool.clone()));
    let transactions = Arc::new(TransactionRepository::new(pool.clone()));
    let ledger = Arc::new(TradeRepository::new(
        pool.clone(),
        accounts.clone(),
        holdings.clone(),
        transactions.clone(),
    ));

    let provider = Arc::new(
        ManualProvider::new()
            .with_quote("AAPL", "Apple Inc.", dec!(150))
            .with_quote("NFLX", "Netflix Inc.", dec!(200)),
    );
    let market_data = Arc::new(MarketDataService::new(provider.clone()));

    let trade_service = TradeService::new(
        market_data.clone(),
        ledger.clone(),
        accounts.clone(),
        holdings.clone(),
    );
    let valuation_service =
        ValuationService::new(accounts.clone(), holdings.clone(), market_data.clone());
    let transaction_service = TransactionService::new(transactions.clone());
    let account_service = AccountService::new(accounts.clone());

    TestApp {
        _tmp: tmp,
        accounts,
        holdings,
        transactions,
        ledger,
        provider,
        trade_service,
        valuation_service,
        transaction_service,
        account_service,
    }
}

fn open_account(app: &TestApp) -> String {
    let account = app
        .account_service
        .create_account(NewAccount {
            id: None,
            name: "integration".to_string(),
            cash: None,
        })
        .unwrap();
    assert_eq!(account.cash, dec!(10000));
    account.id
}

#[tokio::test]
async fn buy_sell_scenario_keeps_the_books_balanced() {
    let app = setup();
    let account_id = open_account(&app);

    // Buy 10 AAPL @ 150.
    let buy = app
        .trade_service
        .buy(TradeOrder::new(&account_id, "AAPL", 10).unwrap())
        .await
        .unwrap();
    assert_eq!(buy.cash_after, dec!(8500));

    let account = app.account_service.get_account(&account_id).unwrap();
    assert_eq!(account.cash, dec!(8500));
    let holding = app
        .holdings
        .get_by_symbol(&account_id, "AAPL")
        .unwrap()
        .unwrap();
    assert_eq!(holding.shares, 10);

    // Price moves; sell the full position @ 160.
    app.provider.set_quote("AAPL", "Apple Inc.", dec!(160));
    let sell = app
        .trade_service
        .sell(TradeOrder::new(&account_id, "AAPL", 10).unwrap())
        .await
        .unwrap();
    assert_eq!(sell.cash_after, dec!(10100));
    assert!(app
        .holdings
        .get_by_symbol(&account_id, "AAPL")
        .unwrap()
        .is_none());

    // Unaffordable buy is rejected and changes nothing.
    app.provider.set_quote("AAPL", "Apple Inc.", dec!(150));
    let err = app
        .trade_service
        .buy(TradeOrder::new(&account_id, "AAPL", 1000).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, TradeError::InsufficientFunds { .. }));

    let account = app.account_service.get_account(&account_id).unwrap();
    assert_eq!(account.cash, dec!(10100));
    assert!(app.holdings.get_for_account(&account_id).unwrap().is_empty());

    // History: exactly the two committed trades, in commit order.
    let history = app
        .transaction_service
        .list_transactions(&account_id)
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, TradeAction::Buy);
    assert_eq!(history[0].symbol, "AAPL");
    assert_eq!(history[0].shares, 10);
    assert_eq!(history[0].price, dec!(150));
    assert_eq!(history[1].action, TradeAction::Sell);
    assert_eq!(history[1].price, dec!(160));
    assert!(history[0].id < history[1].id);
}

#[tokio::test]
async fn partial_sell_leaves_reduced_row() {
    let app = setup();
    let account_id = open_account(&app);

    app.trade_service
        .buy(TradeOrder::new(&account_id, "AAPL", 10).unwrap())
        .await
        .unwrap();
    app.trade_service
        .sell(TradeOrder::new(&account_id, "AAPL", 4).unwrap())
        .await
        .unwrap();

    let holding = app
        .holdings
        .get_by_symbol(&account_id, "AAPL")
        .unwrap()
        .unwrap();
    assert_eq!(holding.shares, 6);
}

#[tokio::test]
async fn sell_without_holding_and_overdrawn_sell_are_rejected() {
    let app = setup();
    let account_id = open_account(&app);

    let err = app
        .trade_service
        .sell(TradeOrder::new(&account_id, "NFLX", 1).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, TradeError::NoSuchHolding(s) if s == "NFLX"));

    app.trade_service
        .buy(TradeOrder::new(&account_id, "NFLX", 2).unwrap())
        .await
        .unwrap();
    let err = app
        .trade_service
        .sell(TradeOrder::new(&account_id, "NFLX", 3).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TradeError::InsufficientShares { requested: 3, held: 2 }
    ));
}

#[tokio::test]
async fn commit_time_recheck_rolls_back_everything() {
    let app = setup();
    let account_id = open_account(&app);

    // Call the ledger commit directly with a cost above the balance; the
    // pre-check in the service never ran, so this is the in-transaction
    // guard alone.
    let err = app
        .ledger
        .commit_buy(&account_id, "AAPL", 100, dec!(150))
        .unwrap_err();
    assert!(matches!(err, TradeError::InsufficientFunds { .. }));

    let account = app.accounts.get_by_id(&account_id).unwrap();
    assert_eq!(account.cash, dec!(10000));
    assert!(app.holdings.get_for_account(&account_id).unwrap().is_empty());
    assert!(app
        .transactions
        .list_for_account(&account_id)
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn valuation_prices_holdings_at_current_quotes() {
    let app = setup();
    let account_id = open_account(&app);

    app.trade_service
        .buy(TradeOrder::new(&account_id, "AAPL", 10).unwrap())
        .await
        .unwrap();
    app.trade_service
        .buy(TradeOrder::new(&account_id, "NFLX", 2).unwrap())
        .await
        .unwrap();

    // Cash: 10000 - 1500 - 400 = 8100.
    app.provider.set_quote("AAPL", "Apple Inc.", dec!(160));
    let summary = app
        .valuation_service
        .get_portfolio(&account_id)
        .await
        .unwrap();

    assert_eq!(summary.cash, dec!(8100));
    assert_eq!(summary.holdings.len(), 2);
    assert_eq!(summary.holdings[0].symbol, "AAPL");
    assert_eq!(summary.holdings[0].value, dec!(1600));
    assert_eq!(summary.holdings[1].symbol, "NFLX");
    assert_eq!(summary.holdings[1].value, dec!(400));
    // 8100 + 1600 + 400
    assert_eq!(summary.net_worth, dec!(10100));

    let net: Decimal = summary.cash + summary.holdings.iter().map(|h| h.value).sum::<Decimal>();
    assert_eq!(summary.net_worth, net);
}

#[tokio::test]
async fn symbols_are_normalized_before_trading() {
    let app = setup();
    let account_id = open_account(&app);

    let confirmation = app
        .trade_service
        .buy(TradeOrder::new(&account_id, " aapl ", 1).unwrap())
        .await
        .unwrap();
    assert_eq!(confirmation.symbol, "AAPL");

    let holding = app
        .holdings
        .get_by_symbol(&account_id, "AAPL")
        .unwrap()
        .unwrap();
    assert_eq!(holding.shares, 1);
}
