use crate::app::model::Model;
use crate::components::common::{ContactMsg, Msg};
use server::contact::{MessageTransport, SubmissionOutcome, SubmissionTicket};
use std::time::Instant;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_contact(&mut self, msg: ContactMsg) -> Option<Msg> {
        match msg {
            ContactMsg::Open => self.page.open_contact(),
            ContactMsg::Close => self.page.close_contact(),
            ContactMsg::Input(ch) => {
                self.page.type_char(ch);
            }
            ContactMsg::Backspace => {
                self.page.backspace();
            }
            ContactMsg::FocusNext => self.page.focus_next(),
            ContactMsg::FocusPrevious => self.page.focus_previous(),
            ContactMsg::Submit => {
                if let Some(ticket) = self.page.submit_contact() {
                    return self.deliver_contact(ticket);
                }
            }
            ContactMsg::Delivered { ticket, result } => {
                match self.page.contact_delivered(ticket, result, Instant::now()) {
                    Some(SubmissionOutcome::Sent) => log::info!("Contact message {ticket} sent"),
                    Some(SubmissionOutcome::Failed(e)) => {
                        log::warn!("Contact message {ticket} failed: {e}")
                    }
                    None => {}
                }
            }
        }
        None
    }

    /// Hand the ticket to the transport on the task pool.
    fn deliver_contact(&mut self, ticket: SubmissionTicket) -> Option<Msg> {
        let transport = match &self.transport {
            Ok(transport) => transport.clone(),
            Err(e) => {
                // Fails like any other delivery so the draft is kept
                return Some(Msg::Contact(ContactMsg::Delivered {
                    ticket: ticket.id(),
                    result: Err(e.clone()),
                }));
            }
        };

        self.task_manager
            .execute(format!("contact delivery {}", ticket.id()), async move {
                let result = transport.deliver(&ticket).await;
                Ok(Msg::Contact(ContactMsg::Delivered {
                    ticket: ticket.id(),
                    result,
                }))
            });
        None
    }
}
