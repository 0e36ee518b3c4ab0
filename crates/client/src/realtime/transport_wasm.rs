//! WASM/Web WebSocket transport using web_sys::WebSocket.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use futures_channel::mpsc::{unbounded, UnboundedReceiver};
use futures_channel::oneshot;
use futures_util::StreamExt;
use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

use super::connection::Transport;

enum Frame {
    Text(String),
    Error(String),
    Closed,
}

type OpenSignal = Rc<RefCell<Option<oneshot::Sender<Result<(), String>>>>>;

pub struct WebTransport {
    ws: WebSocket,
    frames: UnboundedReceiver<Frame>,
    // Kept alive for as long as the socket is; dropped with it
    _onopen: Closure<dyn FnMut(web_sys::Event)>,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onerror: Closure<dyn FnMut(ErrorEvent)>,
    _onclose: Closure<dyn FnMut(CloseEvent)>,
}

impl Transport for WebTransport {
    async fn open(url: &str) -> anyhow::Result<Self> {
        let ws = WebSocket::new(url).map_err(|e| anyhow!("failed to create WebSocket: {e:?}"))?;

        let (frame_tx, frames) = unbounded::<Frame>();
        let (open_tx, open_rx) = oneshot::channel::<Result<(), String>>();
        let open_signal: OpenSignal = Rc::new(RefCell::new(Some(open_tx)));

        let signal = open_signal.clone();
        let onopen = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(tx) = signal.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));

        let tx = frame_tx.clone();
        let onmessage = Closure::wrap(Box::new(move |e: MessageEvent| {
            if let Some(text) = e.data().as_string() {
                let _ = tx.unbounded_send(Frame::Text(text));
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        let tx = frame_tx.clone();
        let signal = open_signal.clone();
        let onerror = Closure::wrap(Box::new(move |_: ErrorEvent| {
            if let Some(open) = signal.borrow_mut().take() {
                let _ = open.send(Err("WebSocket error".to_string()));
            }
            let _ = tx.unbounded_send(Frame::Error("WebSocket error".to_string()));
        }) as Box<dyn FnMut(ErrorEvent)>);
        ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        let tx = frame_tx;
        let signal = open_signal;
        let onclose = Closure::wrap(Box::new(move |e: CloseEvent| {
            let reason = if e.reason().is_empty() {
                format!("Code {}", e.code())
            } else {
                e.reason()
            };
            if let Some(open) = signal.borrow_mut().take() {
                let _ = open.send(Err(reason.clone()));
            }
            crate::log_debug!("WebSocket onclose: {}", reason);
            let _ = tx.unbounded_send(Frame::Closed);
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));

        let transport = Self {
            ws,
            frames,
            _onopen: onopen,
            _onmessage: onmessage,
            _onerror: onerror,
            _onclose: onclose,
        };

        match open_rx.await {
            Ok(Ok(())) => Ok(transport),
            Ok(Err(reason)) => Err(anyhow!(reason)),
            Err(_) => Err(anyhow!("WebSocket dropped before opening")),
        }
    }

    async fn recv(&mut self) -> Option<anyhow::Result<String>> {
        match self.frames.next().await? {
            Frame::Text(text) => Some(Ok(text)),
            Frame::Error(reason) => Some(Err(anyhow!(reason))),
            Frame::Closed => None,
        }
    }

    async fn send(&mut self, text: String) -> anyhow::Result<()> {
        self.ws
            .send_with_str(&text)
            .map_err(|e| anyhow!("send failed: {e:?}"))
    }
}

impl Drop for WebTransport {
    fn drop(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onerror(None);
        self.ws.set_onclose(None);
        let _ = self.ws.close();
    }
}
