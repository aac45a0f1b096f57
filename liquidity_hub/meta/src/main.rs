fn main() {
    multiversx_sc_meta_lib::cli_main::<liquidity_hub::AbiProvider>();
}
