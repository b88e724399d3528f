use blackbox::{
    decode_frame, Cell, GameApi, GameSession, GameStatus, InMemoryTransport, Message, RayOutcome,
    SharedSession, ShotError, Skeleton, Stub, Transport, PROTOCOL_VERSION,
};

fn session() -> GameSession {
    GameSession::new([(1, 1), (4, 5), (5, 5), (6, 2)].map(|(r, c)| Cell::new(r, c))).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stub_skeleton_in_memory() -> anyhow::Result<()> {
    let (server_transport, client_transport) = InMemoryTransport::pair();

    let server = tokio::spawn(async move {
        let mut skeleton = Skeleton::new(session(), server_transport);
        skeleton.run().await.unwrap();
        skeleton.into_engine()
    });

    let mut stub = Stub::new(client_transport);

    let shot = stub.shoot(0, 5).await?.unwrap();
    assert_eq!(shot.outcome, RayOutcome::Absorbed);

    let err = stub.shoot(0, 0).await?.unwrap_err();
    assert_eq!(err, ShotError::Corner(Cell::new(0, 0)));

    assert_eq!(stub.guess(4, 5).await?, Ok(true));
    assert_eq!(stub.status().await?, GameStatus::InProgress);

    let snapshot = stub.snapshot().await?;
    assert_eq!(snapshot.hits, vec![Cell::new(0, 5)]);
    assert_eq!(snapshot.score, 99);

    drop(stub);
    let finished = server.await?;
    assert_eq!(finished.state(), snapshot);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_handshake_version_mismatch() -> anyhow::Result<()> {
    let (server_transport, mut client_transport) = InMemoryTransport::pair();
    let server = tokio::spawn(async move {
        let mut skeleton = Skeleton::new(session(), server_transport);
        skeleton.run().await
    });

    client_transport
        .send(Message::Hello {
            version: PROTOCOL_VERSION + 1,
        })
        .await?;
    assert!(server.await?.is_err());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unexpected_request_gets_error_reply() -> anyhow::Result<()> {
    let (server_transport, mut client_transport) = InMemoryTransport::pair();
    let server = tokio::spawn(async move {
        let mut skeleton = Skeleton::new(session(), server_transport);
        skeleton.run().await
    });

    client_transport
        .send(Message::Hello {
            version: PROTOCOL_VERSION,
        })
        .await?;
    assert!(matches!(client_transport.recv().await?, Message::Hello { .. }));

    client_transport.send(Message::StatusResp(GameStatus::Won)).await?;
    assert!(matches!(client_transport.recv().await?, Message::Error(_)));

    drop(client_transport);
    server.await??;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_frame_is_an_error() -> anyhow::Result<()> {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send_raw(vec![0xff, 0xff, 0xff, 0xff, 0xff])?;
    assert!(b.recv().await.is_err());
    assert!(decode_frame(&[]).is_err());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_closed_channel_reports_error() {
    let (a, mut b) = InMemoryTransport::pair();
    drop(a);
    assert!(b.recv().await.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shared_session_serializes_concurrent_shots() -> anyhow::Result<()> {
    let shared = SharedSession::new(session());
    let mut tasks = Vec::new();
    for col in 1..9i8 {
        let mut handle = shared.clone();
        tasks.push(tokio::spawn(async move {
            handle.shoot(0, col).await?.map_err(|e| anyhow::anyhow!(e))?;
            handle.shoot(9, col).await?.map_err(|e| anyhow::anyhow!(e))?;
            anyhow::Ok(())
        }));
    }
    for task in tasks {
        task.await??;
    }
    let state = shared.with(|s| s.state()).await;
    for col in 1..9i8 {
        assert!(state.used_border.contains(&Cell::new(0, col)));
        assert!(state.used_border.contains(&Cell::new(9, col)));
    }
    let mut distinct = state.used_border.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), state.used_border.len());
    assert_eq!(state.score, 100 - state.used_border.len() as u32);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shared_session_guesses_to_the_end() -> anyhow::Result<()> {
    let shared = SharedSession::new(session());
    let mut tasks = Vec::new();
    for &(r, c) in &[(1, 1), (4, 5), (5, 5), (6, 2)] {
        let mut handle = shared.clone();
        tasks.push(tokio::spawn(async move {
            let hit = handle.guess(r, c).await?.map_err(|e| anyhow::anyhow!(e))?;
            anyhow::ensure!(hit, "({}, {}) should hold an atom", r, c);
            anyhow::Ok(())
        }));
    }
    for task in tasks {
        task.await??;
    }

    let mut handle = shared.clone();
    assert_eq!(handle.status().await?, GameStatus::Won);

    // terminal status survives a late wrong guess
    assert_eq!(handle.guess(2, 2).await?, Ok(false));
    assert_eq!(handle.status().await?, GameStatus::Won);

    let snapshot = handle.snapshot().await?;
    assert_eq!(snapshot, shared.with(|s| s.state()).await);
    assert_eq!(snapshot.atoms_left, 0);
    assert_eq!(snapshot.guesses.len(), 5);
    assert_eq!(snapshot.score, 95);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shared_session_wrong_guess_loses() -> anyhow::Result<()> {
    let mut shared = SharedSession::new(session());
    for &(r, c) in &[(1, 1), (4, 5), (5, 5)] {
        assert_eq!(shared.guess(r, c).await?, Ok(true));
        assert_eq!(shared.status().await?, GameStatus::InProgress);
    }
    assert_eq!(shared.guess(7, 7).await?, Ok(false));
    assert_eq!(shared.status().await?, GameStatus::Lost);
    assert_eq!(shared.snapshot().await?.atoms_left, 1);
    Ok(())
}
