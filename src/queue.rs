//! # Cola de Respuestas Mock
//! src/queue.rs
//!
//! Cola FIFO thread-safe con las respuestas que se servirán a los próximos
//! requests. Cada respuesta se entrega como mucho una vez: `dequeue` lee y
//! remueve en la misma sección crítica.

use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// Respuesta mock ya convertida a JSON. El servidor no inspecciona su contenido.
pub type MockResponse = Value;

/// Cola FIFO de respuestas mock
#[derive(Debug, Default)]
pub struct ResponseQueue {
    pending: Mutex<VecDeque<MockResponse>>,
}

impl ResponseQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encola una respuesta al final
    pub fn enqueue(&self, response: MockResponse) {
        self.lock().push_back(response);
    }

    /// Encola varias respuestas, en orden, de forma atómica
    ///
    /// Equivale a llamar `enqueue` por cada elemento, pero ningún `dequeue`
    /// concurrente puede intercalarse entre ellas.
    pub fn enqueue_batch<I>(&self, responses: I)
    where
        I: IntoIterator<Item = MockResponse>,
    {
        let batch: Vec<MockResponse> = responses.into_iter().collect();
        self.lock().extend(batch);
    }

    /// Convierte `value` a JSON y lo encola
    pub fn enqueue_serialized<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<()> {
        let response = serde_json::to_value(value)?;
        self.enqueue(response);
        Ok(())
    }

    /// Versión por lotes de `enqueue_serialized`: si un valor falla, no se encola ninguno
    pub fn enqueue_batch_serialized<I, T>(&self, values: I) -> serde_json::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let batch = values
            .into_iter()
            .map(|value| serde_json::to_value(&value))
            .collect::<serde_json::Result<Vec<_>>>()?;
        self.enqueue_batch(batch);
        Ok(())
    }

    /// Remueve y retorna la primera respuesta, o `None` si la cola está vacía
    pub fn dequeue(&self) -> Option<MockResponse> {
        self.lock().pop_front()
    }

    /// Respuestas pendientes
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<MockResponse>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_queue_fifo_order() {
        let queue = ResponseQueue::new();
        queue.enqueue(json!({"username": "johndoe"}));
        queue.enqueue(json!({"username": "martymcfly"}));

        assert_eq!(queue.dequeue(), Some(json!({"username": "johndoe"})));
        assert_eq!(queue.dequeue(), Some(json!({"username": "martymcfly"})));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_dequeue_empty_leaves_queue_unchanged() {
        let queue = ResponseQueue::new();
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());

        queue.enqueue(json!(1));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_batch_equals_sequential_enqueue() {
        let batched = ResponseQueue::new();
        batched.enqueue(json!("first"));
        batched.enqueue_batch(vec![json!("a"), json!("b")]);

        let sequential = ResponseQueue::new();
        sequential.enqueue(json!("first"));
        sequential.enqueue(json!("a"));
        sequential.enqueue(json!("b"));

        while let Some(expected) = sequential.dequeue() {
            assert_eq!(batched.dequeue(), Some(expected));
        }
        assert!(batched.is_empty());
    }

    #[test]
    fn test_scalars_and_null_are_valid_responses() {
        let queue = ResponseQueue::new();
        queue.enqueue_serialized(&42).unwrap();
        queue.enqueue_serialized(&Option::<u8>::None).unwrap();

        assert_eq!(queue.dequeue(), Some(json!(42)));
        assert_eq!(queue.dequeue(), Some(Value::Null));
    }

    #[test]
    fn test_batch_serialization_failure_enqueues_nothing() {
        use std::collections::HashMap;

        // Las claves no-string no se pueden serializar como objeto JSON
        let mut bad = HashMap::new();
        bad.insert((1, 2), "x");

        let queue = ResponseQueue::new();
        let result = queue.enqueue_batch_serialized(vec![HashMap::new(), bad]);

        assert!(result.is_err());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_concurrent_dequeue_delivers_each_response_once() {
        let queue = Arc::new(ResponseQueue::new());
        queue.enqueue_batch((0..1000).map(|i| json!(i)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    let mut taken = Vec::new();
                    while let Some(value) = queue.dequeue() {
                        taken.push(value.as_u64().unwrap());
                    }
                    taken
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "response {} delivered twice", value);
            }
        }

        assert_eq!(seen.len(), 1000);
    }
}
