//! Interactive register session.

use anyhow::Result;
use dialoguer::{Confirm, Input};
use pos_client::HttpBackend;
use pos_core::prelude::*;

use super::RegisterArgs;
use crate::context::Context;
use crate::output::Output;
use crate::view;

type Session = RegisterSession<HttpBackend>;

/// One line typed at the register prompt.
#[derive(Debug, PartialEq, Eq)]
enum RegisterInput<'a> {
    /// A product code, passed on as typed.
    Lookup(&'a str),
    Add,
    List,
    Buy,
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_input(line: &str) -> RegisterInput<'_> {
    match line.trim() {
        "+" | "/add" => RegisterInput::Add,
        "/list" | "/ls" => RegisterInput::List,
        "/buy" => RegisterInput::Buy,
        "/clear" => RegisterInput::Clear,
        "/help" | "?" => RegisterInput::Help,
        "/quit" | "/exit" | "/q" => RegisterInput::Quit,
        cmd if cmd.starts_with('/') => RegisterInput::Unknown(cmd),
        _ => RegisterInput::Lookup(line),
    }
}

/// Run the register command.
pub async fn run(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let backend = ctx.backend()?;
    let identity = ctx.config.register.identity();

    ctx.output.header("POS Register");
    ctx.output.kv("Backend", backend.base_url().as_str());
    ctx.output.kv(
        "Register",
        &format!("store {} / POS {} / operator {}", identity.store_code, identity.pos_no, identity.employee_code),
    );
    print_help(ctx);

    let mut session = RegisterSession::new(backend, identity);

    loop {
        let prompt = if session.can_add() {
            "Code (+ to add)"
        } else {
            "Code"
        };
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        match parse_input(&line) {
            RegisterInput::Lookup(code) => lookup(&mut session, code, ctx).await,
            RegisterInput::Add => add(&mut session, ctx),
            RegisterInput::List => {
                show_list(session.list(), &ctx.output);
            }
            RegisterInput::Buy => buy(&mut session, &args, ctx).await?,
            RegisterInput::Clear => session.clear_input(),
            RegisterInput::Help => print_help(ctx),
            RegisterInput::Quit => {
                if confirm_quit(&session, &args, ctx)? {
                    break;
                }
            }
            RegisterInput::Unknown(cmd) => {
                ctx.output.warn(&format!("Unknown command: {} (try /help)", cmd));
            }
        }
    }

    Ok(())
}

async fn lookup(session: &mut Session, code: &str, ctx: &Context) {
    session.set_code(code);
    if session.code().is_empty() {
        return;
    }

    let spinner = ctx.output.spinner("Looking up product...");
    let result = session.load_product().await;
    spinner.finish_and_clear();

    match result {
        Ok(Some(current)) => view::print_product(&ctx.output, Some(current)),
        Ok(None) => {}
        Err(e) => {
            ctx.output.error(view::LOOKUP_FAILED);
            ctx.output.debug(&e.to_string());
        }
    }
}

fn add(session: &mut Session, ctx: &Context) {
    let name = session
        .current()
        .and_then(LookupResult::product)
        .map(|p| p.name.clone())
        .unwrap_or_default();

    match session.add_to_list() {
        Ok(AddOutcome::Inserted) => {
            ctx.output.success(&format!("Added {}", name));
            print_totals(session, ctx);
        }
        Ok(AddOutcome::Incremented { quantity }) => {
            ctx.output.success(&format!("{} x{}", name, quantity));
            print_totals(session, ctx);
        }
        Err(PosError::NoValidProduct) => ctx.output.warn(view::SELECT_VALID_PRODUCT),
        Err(e) => ctx.output.error(&e.to_string()),
    }
}

fn print_totals(session: &Session, ctx: &Context) {
    match session.totals() {
        Ok(totals) => {
            ctx.output.kv("Items", &session.list().unit_count().to_string());
            ctx.output.kv("Subtotal", &totals.subtotal.display());
        }
        Err(e) => ctx.output.error(&e.to_string()),
    }
}

/// Print the list and totals, reporting a failure in place.
///
/// Returns whether the totals could be computed.
fn show_list(list: &PurchaseList, output: &Output) -> bool {
    match view::print_list(output, list) {
        Ok(()) => true,
        Err(e) => {
            output.error(&e.to_string());
            false
        }
    }
}

async fn buy(session: &mut Session, args: &RegisterArgs, ctx: &Context) -> Result<()> {
    if session.list().is_empty() {
        ctx.output.warn(view::NO_ITEMS);
        return Ok(());
    }

    if !show_list(session.list(), &ctx.output) {
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Commit this purchase?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Purchase cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Submitting purchase...");
    let result = session.purchase().await;
    spinner.finish_and_clear();

    match result {
        Ok(receipt) => {
            ctx.output.success(&view::receipt_message(&receipt));
            ctx.output.kv("Units", &receipt.units.to_string());
            ctx.output.kv(
                "Completed",
                &receipt
                    .completed_at
                    .with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            );
        }
        Err(PosError::EmptyPurchaseList) => ctx.output.warn(view::NO_ITEMS),
        Err(e) => {
            ctx.output.error(view::PURCHASE_FAILED);
            ctx.output.debug(&e.to_string());
            ctx.output.info("The purchase list was kept; /buy to retry");
        }
    }

    Ok(())
}

fn confirm_quit(session: &Session, args: &RegisterArgs, ctx: &Context) -> Result<bool> {
    if session.list().is_empty() || args.yes {
        return Ok(true);
    }

    ctx.output.warn(&format!(
        "{} item(s) have not been purchased",
        session.list().unit_count()
    ));
    Ok(Confirm::new()
        .with_prompt("Quit and discard the purchase list?")
        .default(false)
        .interact()?)
}

fn print_help(ctx: &Context) {
    ctx.output.info("Type a product code and press Enter to look it up.");
    ctx.output.list_item("+ or /add   add the loaded product");
    ctx.output.list_item("/list       show the purchase list and totals");
    ctx.output.list_item("/buy        commit the purchase");
    ctx.output.list_item("/clear      clear the loaded product");
    ctx.output.list_item("/quit       leave the register");
}
