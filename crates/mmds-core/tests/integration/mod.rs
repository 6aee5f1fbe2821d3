mod bridge_export;
mod contract_parity;
mod model_closure;
