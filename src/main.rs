fn main() -> anyhow::Result<()> {
    promo_lib::run()
}
