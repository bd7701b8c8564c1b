pub mod spot_prices;
