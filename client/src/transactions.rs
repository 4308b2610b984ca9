use colored::Colorize;
use gif_portal_interface::{
    error::AnchorErrorCode,
    instructions::InstructionTag,
};
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    nonblocking::rpc_client::RpcClient,
    rpc_response::RpcSimulateTransactionResult,
};
use solana_sdk::{
    message::{
        Instruction,
        Message,
    },
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::{
    gateway::GatewayError,
    logs::{
        log_error,
        log_info,
        log_success,
        LogColor,
    },
};

/// Signs `instructions` with `payer` plus any extra `signers` and sends them in one transaction,
/// waiting for confirmation at the client's commitment.
pub async fn send_transaction(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
) -> Result<Signature, GatewayError> {
    let bh = rpc.get_latest_blockhash().await?;

    let msg = Message::new(instructions, Some(&payer.pubkey()));
    let mut tx = Transaction::new_unsigned(msg);
    tx.try_sign(
        &std::iter::once(payer)
            .chain(signers.iter().copied())
            .collect::<Vec<_>>(),
        bh,
    )?;

    match rpc.send_and_confirm_transaction(&tx).await {
        Ok(sig) => {
            let sender_info = format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
            log_success("Signature", format!("{sig}\n{sender_info}"));
            Ok(sig)
        }
        Err(error) => {
            log_instruction_error(&error, instructions);
            log_info("Payer", payer.pubkey());
            Err(error.into())
        }
    }
}

/// Logs the failing instruction and, when the program rejected it, the Anchor error behind it.
pub fn log_instruction_error(error: &ClientError, instructions: &[Instruction]) {
    use solana_client::rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    };
    use solana_instruction_error::InstructionError;
    use solana_transaction_error::TransactionError;

    let kind = error.kind();
    let ClientErrorKind::RpcError(RpcResponseError {
        data:
            RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                err: Some(ui_err),
                ..
            }),
        ..
    }) = kind
    else {
        log_error("Transaction error", error);
        return;
    };

    let TransactionError::InstructionError(ixn_idx, ixn_error) = ui_err.clone().into() else {
        log_error("Transaction error", error);
        return;
    };

    let tag = instructions
        .get(ixn_idx as usize)
        .and_then(|ixn| InstructionTag::from_instruction_data(&ixn.data));
    let tag = tag.map_or_else(|| format!("instruction {ixn_idx}"), |tag| tag.to_string());

    match ixn_error {
        InstructionError::Custom(code) => match AnchorErrorCode::from_repr(code) {
            Some(anchor_error) => log_error("Program error", format!("({tag}, {anchor_error})")),
            None => log_error("Program error", format!("({tag}, custom error {code})")),
        },
        other => log_error("Instruction error", format!("({tag}, {other})")),
    }
}
