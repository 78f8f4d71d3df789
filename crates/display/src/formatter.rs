//! The presentation formatter entry point.

use crate::config::DisplayConfig;
use crate::context::RequestContext;
use crate::i18n::{MessageKey, Translator};

/// Stateless presentation formatter for one page render.
///
/// Borrows the display configuration, the translator, and the request
/// context; every formatting operation is a pure function of those inputs
/// and the record passed to it.
#[derive(Debug)]
pub struct Formatter<'a, T: Translator> {
    pub(crate) config: &'a DisplayConfig,
    pub(crate) translator: &'a T,
    pub(crate) ctx: &'a RequestContext,
}

impl<'a, T: Translator> Formatter<'a, T> {
    pub fn new(config: &'a DisplayConfig, translator: &'a T, ctx: &'a RequestContext) -> Self {
        Self {
            config,
            translator,
            ctx,
        }
    }

    pub fn context(&self) -> &RequestContext {
        self.ctx
    }

    pub(crate) fn t(&self, key: MessageKey) -> String {
        self.translator.translate(key)
    }
}
